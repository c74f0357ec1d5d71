//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                          │
//! │  ├── StoreError       - Inventory store access/persistence failures    │
//! │  ├── AuditError       - Audit sink write failures                      │
//! │  ├── VendError        - What VendingService operations return          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: StoreError/AuditError → VendError → AppError → Terminal         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store and sink implementations live in `vend-store`, but their error
//! types live here so the traits in [`crate::store`] can name them.

use std::path::PathBuf;

use thiserror::Error;

use crate::money::Money;
use crate::types::SnackKey;

// =============================================================================
// Store Error
// =============================================================================

/// Inventory store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the stock file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stock file line could not be parsed.
    ///
    /// ## When This Occurs
    /// - Line does not have exactly three `::`-separated fields
    /// - Count is not an integer
    /// - Price is not a two-decimal amount
    #[error("Malformed stock record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The store cannot be accessed at all.
    #[error("Inventory store unavailable: {0}")]
    Unavailable(String),

    /// Generic bulk-load failure surfaced by the service.
    ///
    /// The underlying cause is not carried.
    #[error("Error loading stock")]
    LoadFailed,

    /// Generic bulk-save failure surfaced by the service.
    #[error("Error saving stock")]
    SaveFailed,
}

// =============================================================================
// Audit Error
// =============================================================================

/// Audit sink failures.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to write to audit log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Audit log unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Vend Error
// =============================================================================

/// Errors returned by [`crate::service::VendingService`].
///
/// ## User Workflow
/// ```text
/// Insert 0.50, choose Mars (0.70)
///      │
///      ▼
/// vend(key, coins)
///      │
///      ▼
/// InsufficientFunds { price: 0.70, inserted: 0.50 }
///      │
///      ▼
/// Terminal shows: "Insufficient funds: price 0.70, inserted 0.50"
///                 and returns the coins
/// ```
#[derive(Debug, Error)]
pub enum VendError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error("Snack not found: {0}")]
    SnackNotFound(SnackKey),

    /// The snack is listed with a zero count.
    #[error("Snack out of stock: {0}")]
    OutOfStock(SnackKey),

    #[error("Insufficient funds: price {price}, inserted {inserted}")]
    InsufficientFunds { price: Money, inserted: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type StoreResult<T> = Result<T, StoreError>;
pub type AuditResult<T> = Result<T, AuditError>;
pub type VendResult<T> = Result<T, VendError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_stock_messages() {
        assert_eq!(StoreError::LoadFailed.to_string(), "Error loading stock");
        assert_eq!(StoreError::SaveFailed.to_string(), "Error saving stock");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = VendError::InsufficientFunds {
            price: Money::from_pence(70),
            inserted: Money::from_pence(50),
        };
        assert_eq!(err.to_string(), "Insufficient funds: price 0.70, inserted 0.50");
    }

    #[test]
    fn test_store_error_is_transparent_in_vend_error() {
        let err: VendError = StoreError::SaveFailed.into();
        assert!(matches!(err, VendError::Store(StoreError::SaveFailed)));
        assert_eq!(err.to_string(), "Error saving stock");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 64,
        };
        assert_eq!(err.to_string(), "name must be at most 64 characters");
    }
}
