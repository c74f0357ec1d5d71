//! # vend-store: File Layer for the Vending Machine
//!
//! Flat-file implementations of the `InventoryStore` and `AuditSink` traits
//! from vend-core.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vending Machine Data Flow                        │
//! │                                                                         │
//! │  Terminal menu (vend)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  VendingService (vend-core)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     vend-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐    ┌────────────┐  │   │
//! │  │   │  StoreConfig  │    │ FileInventory    │    │ FileAudit  │  │   │
//! │  │   │  (config.rs)  │───►│ Store (stock.rs) │    │ Sink       │  │   │
//! │  │   │  data_dir     │    │ name::count::    │    │ (audit.rs) │  │   │
//! │  │   │  extension    │    │ price lines      │    │ append     │  │   │
//! │  │   └───────────────┘    └──────────────────┘    └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vend_core::VendingService;
//! use vend_store::{FileAuditSink, FileInventoryStore, StoreConfig};
//!
//! let store = FileInventoryStore::new(StoreConfig::new("./data"));
//! let audit = FileAuditSink::new("./data/audit.txt");
//! let mut machine = VendingService::new(store, audit);
//!
//! machine.load_stock("stock")?;
//! # Ok::<(), vend_core::VendError>(())
//! ```

pub mod config;
pub mod repository;

pub use config::StoreConfig;
pub use repository::audit::FileAuditSink;
pub use repository::stock::FileInventoryStore;

use vend_core::VendingService;

/// The service wired to the file-backed collaborators.
pub type FileVendingService = VendingService<FileInventoryStore, FileAuditSink>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vend_core::{Coin, Money, Snack, StoreError, VendError};

    fn file_machine(dir: &TempDir) -> FileVendingService {
        VendingService::new(
            FileInventoryStore::new(StoreConfig::new(dir.path())),
            FileAuditSink::new(dir.path().join("audit.txt")),
        )
    }

    #[test]
    fn test_sell_out_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let mut machine = file_machine(&dir);
        let mars = machine
            .add_snack(Snack::new("Mars", 2, Money::from_pence(70)))
            .unwrap();
        let twix = machine
            .add_snack(Snack::new("Twix", 1, Money::from_pence(80)))
            .unwrap();

        let vend = machine.vend(twix, &[Coin::Pound]).unwrap();
        assert_eq!(vend.change, vec![Coin::TwentyPence]);
        machine.purchase_snack(mars).unwrap();
        machine.save_stock("stock").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("stock.txt")).unwrap(),
            "Mars::1::0.70\n"
        );

        let audit = fs::read_to_string(dir.path().join("audit.txt")).unwrap();
        let operations: Vec<&str> = audit
            .lines()
            .filter_map(|line| line.split_once(' ').map(|(_, op)| op))
            .collect();
        assert_eq!(
            operations,
            vec![
                "Added snack 'Mars'",
                "Added snack 'Twix'",
                "Twix purchased. Now out of stock",
                "Mars purchased.",
            ]
        );

        let mut reloaded = file_machine(&dir);
        reloaded.load_stock("stock").unwrap();
        assert!(reloaded.snack_name_exists("Mars").unwrap());
        assert!(!reloaded.snack_name_exists("Twix").unwrap());
    }

    #[test]
    fn test_corrupt_stock_file_surfaces_generic_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("stock.txt"), "Mars::lots::0.70\n").unwrap();

        let mut machine = file_machine(&dir);
        let err = machine.load_stock("stock").unwrap_err();
        assert!(matches!(err, VendError::Store(StoreError::LoadFailed)));
        assert_eq!(err.to_string(), "Error loading stock");
    }

    #[test]
    fn test_save_failure_surfaces_generic_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let mut machine = VendingService::new(
            FileInventoryStore::new(StoreConfig::new(&blocker)),
            FileAuditSink::new(dir.path().join("audit.txt")),
        );
        machine
            .add_snack(Snack::new("Mars", 2, Money::from_pence(70)))
            .unwrap();

        let err = machine.save_stock("stock").unwrap_err();
        assert!(matches!(err, VendError::Store(StoreError::SaveFailed)));
        assert_eq!(err.to_string(), "Error saving stock");
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "");
    }
}
