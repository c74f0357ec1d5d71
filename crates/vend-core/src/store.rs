//! # Store Traits
//!
//! The two collaborators [`crate::service::VendingService`] talks to.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  VendingService                                                        │
//! │       │                                                                 │
//! │       ├──► InventoryStore ── get / list / add / edit / remove          │
//! │       │         │            load / save (whole snapshot)              │
//! │       │         ├── MemoryInventoryStore   (this file, tests)          │
//! │       │         └── FileInventoryStore     (vend-store)                │
//! │       │                                                                 │
//! │       └──► AuditSink ─────── log(operation)                            │
//! │                 ├── MemoryAuditSink        (this file, tests)          │
//! │                 └── FileAuditSink          (vend-store)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both traits are synchronous. The service owns its store and sink, so
//! `&mut self` on the mutating methods is the single-writer boundary.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::error::{AuditError, AuditResult, StoreError, StoreResult};
use crate::inventory::Inventory;
use crate::types::{AuditRecord, Snack, SnackKey};

// =============================================================================
// Inventory Store
// =============================================================================

/// Keyed snack storage with whole-snapshot persistence.
///
/// ## Persistence Invariant
/// Records with `count == 0` are dropped by both `load` and `save`.
pub trait InventoryStore {
    /// Replaces the in-memory inventory with the snapshot named `source`.
    ///
    /// On failure the current inventory is left unchanged.
    fn load(&mut self, source: &str) -> StoreResult<()>;

    /// Writes the current inventory to `source`.
    fn save(&self, source: &str) -> StoreResult<()>;

    /// Whether a snapshot named `source` exists, whether or not it would
    /// load cleanly.
    fn exists(&self, source: &str) -> StoreResult<bool>;

    /// Every snack, keyed.
    fn list(&self) -> StoreResult<BTreeMap<SnackKey, Snack>>;

    fn get(&self, key: SnackKey) -> StoreResult<Option<Snack>>;

    /// Stores `snack` under a fresh key.
    fn add(&mut self, snack: Snack) -> StoreResult<SnackKey>;

    /// Returns whether anything was removed.
    fn remove(&mut self, key: SnackKey) -> StoreResult<bool>;

    /// Returns whether `key` existed and was overwritten.
    fn edit(&mut self, key: SnackKey, snack: Snack) -> StoreResult<bool>;

    /// Number of snacks.
    fn len(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    fn contains(&self, key: SnackKey) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Append-only operation log.
pub trait AuditSink {
    /// Appends one timestamped record for `operation`.
    fn log(&mut self, operation: &str) -> AuditResult<()>;
}

// =============================================================================
// In-Memory Implementations
// =============================================================================

/// Inventory store whose "files" are named in-memory snapshots.
///
/// Useful for tests and dry runs. `load` of a name that was never saved
/// fails the same way a missing file would.
#[derive(Debug, Default, Clone)]
pub struct MemoryInventoryStore {
    inventory: Inventory,
    // `save` takes &self
    snapshots: RefCell<HashMap<String, Vec<Snack>>>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a snapshot as if a file named `source` held `snacks`.
    pub fn with_snapshot(self, source: impl Into<String>, snacks: Vec<Snack>) -> Self {
        self.snapshots.borrow_mut().insert(source.into(), snacks);
        self
    }

    /// A copy of the stored snapshot named `source`, if any.
    pub fn snapshot(&self, source: &str) -> Option<Vec<Snack>> {
        self.snapshots.borrow().get(source).cloned()
    }
}

impl InventoryStore for MemoryInventoryStore {
    fn load(&mut self, source: &str) -> StoreResult<()> {
        let records = self
            .snapshot(source)
            .ok_or_else(|| StoreError::Unavailable(format!("no snapshot named '{}'", source)))?;

        let mut loaded = BTreeMap::new();
        let mut key: SnackKey = 1;
        for snack in records {
            if snack.in_stock() {
                loaded.insert(key, snack);
            }
            key += 1;
        }

        self.inventory.replace_all(loaded, key);
        Ok(())
    }

    fn save(&self, source: &str) -> StoreResult<()> {
        let records = self
            .inventory
            .iter()
            .filter(|(_, snack)| snack.in_stock())
            .map(|(_, snack)| snack.clone())
            .collect();
        self.snapshots.borrow_mut().insert(source.to_string(), records);
        Ok(())
    }

    fn exists(&self, source: &str) -> StoreResult<bool> {
        Ok(self.snapshots.borrow().contains_key(source))
    }

    fn list(&self) -> StoreResult<BTreeMap<SnackKey, Snack>> {
        Ok(self.inventory.snapshot())
    }

    fn get(&self, key: SnackKey) -> StoreResult<Option<Snack>> {
        Ok(self.inventory.get(key).cloned())
    }

    fn add(&mut self, snack: Snack) -> StoreResult<SnackKey> {
        Ok(self.inventory.insert(snack))
    }

    fn remove(&mut self, key: SnackKey) -> StoreResult<bool> {
        Ok(self.inventory.remove(key).is_some())
    }

    fn edit(&mut self, key: SnackKey, snack: Snack) -> StoreResult<bool> {
        Ok(self.inventory.replace(key, snack))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.inventory.len())
    }
}

/// Audit sink that keeps records in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryAuditSink {
    records: Vec<AuditRecord>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// Just the descriptions, oldest first.
    pub fn descriptions(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.description.as_str()).collect()
    }
}

impl AuditSink for MemoryAuditSink {
    fn log(&mut self, operation: &str) -> AuditResult<()> {
        self.records.push(AuditRecord::now(operation));
        Ok(())
    }
}

/// Audit sink that always fails; exercises error propagation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingAuditSink;

impl AuditSink for FailingAuditSink {
    fn log(&mut self, _operation: &str) -> AuditResult<()> {
        Err(AuditError::Unavailable("audit sink is closed".to_string()))
    }
}
