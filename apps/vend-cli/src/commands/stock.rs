//! # Stock Commands
//!
//! Menu options 4 and 5. A blank answer means the configured stock name.

use std::io::{BufRead, Write};

use vend_core::{AuditSink, InventoryStore, ValidationError};

use crate::error::AppResult;
use crate::session::Session;

impl<S, A, R, W> Session<S, A, R, W>
where
    S: InventoryStore,
    A: AuditSink,
    R: BufRead,
    W: Write,
{
    /// Menu option 4.
    pub(crate) fn save_stock(&mut self) -> AppResult<()> {
        let name = self.ask_stock_name("Save as")?;
        self.machine.save_stock(&name)?;
        if name == self.config.stock_name {
            self.keep_startup_stock = false;
        }
        self.console.say(format!("Stock saved to '{}'", name))
    }

    /// Menu option 5. Replaces the whole inventory.
    pub(crate) fn load_stock(&mut self) -> AppResult<()> {
        let name = self.ask_stock_name("Load from")?;
        self.machine.load_stock(&name)?;
        self.keep_startup_stock = false;
        let count = self.machine.list_snacks()?.len();
        self.console
            .say(format!("Loaded stock '{}' ({} snacks)", name, count))
    }

    fn ask_stock_name(&mut self, action: &str) -> AppResult<String> {
        let prompt = format!("{} (blank for '{}'):", action, self.config.stock_name);
        let name = self.console.ask(&prompt)?;
        let name = if name.is_empty() {
            self.config.stock_name.clone()
        } else {
            name
        };

        if !self.machine.validate_filename(&name) {
            return Err(ValidationError::InvalidFormat {
                field: "stock name".to_string(),
                reason: "leave off the file extension".to_string(),
            }
            .into());
        }
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::{run_session, session_with, stocked_store};
    use vend_core::store::MemoryInventoryStore;
    use vend_core::{Money, Snack};

    #[test]
    fn test_save_under_new_name() {
        let (machine, screen) = run_session(session_with(stocked_store(), "4\nweekend\n0\n"));
        assert!(screen.contains("Stock saved to 'weekend'"));
        assert_eq!(machine.store().snapshot("weekend").unwrap().len(), 2);
    }

    #[test]
    fn test_filename_with_extension_is_rejected() {
        let (machine, screen) = run_session(session_with(stocked_store(), "4\nweekend.txt\n0\n"));
        assert!(screen.contains("stock name has invalid format: leave off the file extension"));
        assert!(machine.store().snapshot("weekend.txt").is_none());
    }

    #[test]
    fn test_load_replaces_inventory() {
        let store = stocked_store().with_snapshot(
            "weekend",
            vec![Snack::new("Bounty", 3, Money::from_pence(75))],
        );
        let (machine, screen) = run_session(session_with(store, "5\nweekend\n5\nmissing\n0\n"));

        assert!(screen.contains("Loaded stock 'weekend' (1 snacks)"));
        assert!(screen.contains("Error loading stock"));
        let snacks = machine.list_snacks().unwrap();
        assert_eq!(snacks.len(), 1);
        assert_eq!(snacks[&1].name, "Bounty");
    }

    #[test]
    fn test_blank_name_uses_configured_stock() {
        let (machine, screen) =
            run_session(session_with(MemoryInventoryStore::new(), "4\n\n0\n"));
        assert!(screen.contains("Stock saved to 'stock'"));
        assert_eq!(machine.store().snapshot("stock"), Some(Vec::new()));
    }
}
