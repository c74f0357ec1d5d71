//! # vend-core: Pure Business Logic for the Vending Machine
//!
//! This crate is the **heart** of the vending machine. It contains the stock
//! rules, purchase semantics and change making, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Vending Machine Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vend (terminal menu)                         │   │
//! │  │    List ──► Buy (insert coins) ──► Change ──► Admin / Save      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  service  │  │   money   │  │   coin    │  │ validation│  │   │
//! │  │   │  Vending  │  │   Money   │  │   Coin    │  │   rules   │  │   │
//! │  │   │  Service  │  │  (pence)  │  │  change   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   InventoryStore / AuditSink traits ── no files, no terminal    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vend-store (File Layer)                         │   │
//! │  │        stock.txt (name::count::price)   audit.txt (append)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Snack, AuditRecord, Vend)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`coin`] - The fixed denomination table
//! - [`change`] - Funds totalling and greedy change making
//! - [`inventory`] - Owned keyed snack collection
//! - [`store`] - `InventoryStore` / `AuditSink` traits and in-memory versions
//! - [`service`] - `VendingService`
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use vend_core::{Coin, Money, Snack, VendingService};
//! use vend_core::store::{MemoryAuditSink, MemoryInventoryStore};
//!
//! let mut machine = VendingService::new(MemoryInventoryStore::new(), MemoryAuditSink::new());
//! let mars = machine.add_snack(Snack::new("Mars", 5, Money::from_pence(70))).unwrap();
//!
//! let vend = machine.vend(mars, &[Coin::Pound]).unwrap();
//! assert_eq!(vend.change, vec![Coin::TwentyPence, Coin::TenPence]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod coin;
pub mod error;
pub mod inventory;
pub mod money;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coin::{Coin, DENOMINATIONS};
pub use error::{AuditError, StoreError, ValidationError, VendError};
pub use inventory::Inventory;
pub use money::Money;
pub use service::VendingService;
pub use store::{AuditSink, InventoryStore};
pub use types::*;
