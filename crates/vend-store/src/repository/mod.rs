//! # Repository Module
//!
//! File-backed implementations of the vend-core store traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  VendingService                                                        │
//! │       │                                                                 │
//! │       │  store.load("stock") / store.add(snack) / audit.log("...")     │
//! │       ▼                                                                 │
//! │  FileInventoryStore          FileAuditSink                             │
//! │  ├── in-memory Inventory     └── append(<timestamp> <operation>)       │
//! │  ├── load  (whole file)                                                │
//! │  └── save  (whole file)                                                │
//! │       │                            │                                    │
//! │       ▼                            ▼                                    │
//! │  <data_dir>/stock.txt         <data_dir>/audit.txt                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`FileInventoryStore`](stock::FileInventoryStore) - stock snapshots
//! - [`FileAuditSink`](audit::FileAuditSink) - audit trail

pub mod audit;
pub mod stock;
