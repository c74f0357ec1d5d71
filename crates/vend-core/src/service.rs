//! # Vending Service
//!
//! Stock mutation rules, purchase semantics and funds handling on top of an
//! [`InventoryStore`] and an [`AuditSink`].
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  vend(key, coins)                                                       │
//! │     │                                                                   │
//! │     ├── snack absent?          → SnackNotFound        (no mutation)    │
//! │     ├── count == 0?            → OutOfStock           (no mutation)    │
//! │     ├── price < 0?             → Validation           (no mutation)    │
//! │     ├── funds < price?         → InsufficientFunds    (no mutation)    │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  purchase_snack(key)                                                    │
//! │     ├── count > 1  → count - 1     audit "<name> purchased."           │
//! │     └── count <= 1 → remove entry  audit "<name> purchased. Now out    │
//! │                                          of stock"                     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  get_change(inserted - price) → Vec<Coin>                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating operation writes exactly one audit record. Store and audit
//! failures propagate; an absent key on remove/edit is a logged no-op.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::change;
use crate::coin::Coin;
use crate::error::{StoreError, VendError, VendResult};
use crate::money::Money;
use crate::store::{AuditSink, InventoryStore};
use crate::types::{Snack, SnackKey, Vend};
use crate::validation;

/// The vending machine's transactional service layer.
///
/// ## Usage
/// ```rust
/// use vend_core::money::Money;
/// use vend_core::service::VendingService;
/// use vend_core::store::{MemoryAuditSink, MemoryInventoryStore};
/// use vend_core::types::Snack;
///
/// let mut service = VendingService::new(MemoryInventoryStore::new(), MemoryAuditSink::new());
/// let key = service.add_snack(Snack::new("Mars", 5, Money::from_pence(70))).unwrap();
///
/// service.purchase_snack(key).unwrap();
/// assert_eq!(service.get_snack(key).unwrap().unwrap().count, 4);
/// ```
#[derive(Debug)]
pub struct VendingService<S, A> {
    store: S,
    audit: A,
}

impl<S: InventoryStore, A: AuditSink> VendingService<S, A> {
    pub fn new(store: S, audit: A) -> Self {
        VendingService { store, audit }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// The snack at `key`, or `None` if the key is unmapped.
    pub fn get_snack(&self, key: SnackKey) -> VendResult<Option<Snack>> {
        Ok(self.store.get(key)?)
    }

    /// Full inventory snapshot in key order.
    pub fn list_snacks(&self) -> VendResult<BTreeMap<SnackKey, Snack>> {
        Ok(self.store.list()?)
    }

    /// Validates `snack` and stores it under a fresh key.
    pub fn add_snack(&mut self, snack: Snack) -> VendResult<SnackKey> {
        validation::validate_snack(&snack)?;
        let name = snack.name.clone();
        let key = self.store.add(snack)?;
        self.audit.log(&format!("Added snack '{}'", name))?;
        info!(key, name = %name, "Snack added");
        Ok(key)
    }

    /// Removes the snack at `key`. An absent key is a warning, not an error.
    pub fn remove_snack(&mut self, key: SnackKey) -> VendResult<()> {
        let Some(snack) = self.store.get(key)? else {
            warn!(key, "Snack does not exist");
            return Ok(());
        };

        self.store.remove(key)?;
        self.audit.log(&format!("Removed snack '{}'", snack.name))?;
        info!(key, name = %snack.name, "Snack removed");
        Ok(())
    }

    /// Validates `snack` and replaces the snack at `key`, keeping the key.
    /// An absent key is a warning, not an error.
    pub fn edit_snack(&mut self, key: SnackKey, snack: Snack) -> VendResult<()> {
        validation::validate_snack(&snack)?;
        if !self.store.contains(key)? {
            warn!(key, "Snack does not exist");
            return Ok(());
        }

        let name = snack.name.clone();
        self.store.edit(key, snack)?;
        self.audit.log(&format!("Edited snack '{}'", name))?;
        info!(key, name = %name, "Snack edited");
        Ok(())
    }

    // =========================================================================
    // Purchasing
    // =========================================================================

    /// Sells one unit of the snack at `key`.
    ///
    /// The last unit removes the entry outright, so a zero count is never
    /// stored.
    pub fn purchase_snack(&mut self, key: SnackKey) -> VendResult<()> {
        let snack = self.store.get(key)?.ok_or(VendError::SnackNotFound(key))?;

        if snack.count > 1 {
            self.store.edit(key, snack.with_one_sold())?;
            self.audit.log(&format!("{} purchased.", snack.name))?;
            info!(key, name = %snack.name, remaining = snack.count - 1, "Snack purchased");
        } else {
            self.store.remove(key)?;
            self.audit
                .log(&format!("{} purchased. Now out of stock", snack.name))?;
            info!(key, name = %snack.name, "Snack purchased, now out of stock");
        }

        Ok(())
    }

    /// Complete coin purchase: checks stock, price and funds, sells one unit
    /// and works out the change.
    ///
    /// Nothing is mutated or audited unless the purchase goes through.
    pub fn vend(&mut self, key: SnackKey, coins: &[Coin]) -> VendResult<Vend> {
        let snack = self.store.get(key)?.ok_or(VendError::SnackNotFound(key))?;
        if !snack.in_stock() {
            return Err(VendError::OutOfStock(key));
        }
        validation::validate_price(snack.price)?;
        let inserted = self.funds_value(coins);

        if !self.sufficient_funds(coins, snack.price) {
            debug!(key, price = %snack.price, inserted = %inserted, "Insufficient funds");
            return Err(VendError::InsufficientFunds {
                price: snack.price,
                inserted,
            });
        }

        self.purchase_snack(key)?;
        let change = self.get_change(inserted - snack.price);

        Ok(Vend {
            key,
            snack_name: snack.name,
            price: snack.price,
            inserted,
            change,
        })
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replaces the inventory from `source`.
    ///
    /// Every failure surfaces as [`StoreError::LoadFailed`].
    pub fn load_stock(&mut self, source: &str) -> VendResult<()> {
        self.store.load(source).map_err(|cause| {
            debug!(source, error = %cause, "Stock load failed");
            StoreError::LoadFailed
        })?;
        info!(source, "Stock loaded");
        Ok(())
    }

    /// Writes the inventory to `source`.
    ///
    /// Every failure surfaces as [`StoreError::SaveFailed`].
    pub fn save_stock(&self, source: &str) -> VendResult<()> {
        self.store.save(source).map_err(|cause| {
            debug!(source, error = %cause, "Stock save failed");
            StoreError::SaveFailed
        })?;
        info!(source, "Stock saved");
        Ok(())
    }

    /// Whether a stock snapshot named `source` exists, readable or not.
    pub fn stock_exists(&self, source: &str) -> VendResult<bool> {
        Ok(self.store.exists(source)?)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    pub fn snack_exists(&self, key: SnackKey) -> VendResult<bool> {
        Ok(self.store.contains(key)?)
    }

    /// Exact, case-sensitive name match against every snack.
    pub fn snack_name_exists(&self, name: &str) -> VendResult<bool> {
        Ok(self.store.list()?.values().any(|snack| snack.name == name))
    }

    /// True iff the inventory holds at least `ordinal` snacks.
    ///
    /// This is a size check, not a key check: after removals the key space
    /// has gaps and a passing ordinal need not be a live key.
    pub fn validate_snack_selection(&self, ordinal: usize) -> VendResult<bool> {
        Ok(self.store.len()? >= ordinal)
    }

    pub fn validate_filename(&self, name: &str) -> bool {
        validation::validate_filename(name)
    }

    // =========================================================================
    // Funds
    // =========================================================================

    pub fn funds_value(&self, coins: &[Coin]) -> Money {
        change::funds_value(coins)
    }

    pub fn sufficient_funds(&self, coins: &[Coin], price: Money) -> bool {
        change::sufficient_funds(coins, price)
    }

    pub fn get_change(&self, amount: Money) -> Vec<Coin> {
        change::make_change(amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
