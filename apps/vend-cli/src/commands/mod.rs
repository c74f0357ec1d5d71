//! # Menu Commands
//!
//! One handler per menu option, each an `impl` block on
//! [`Session`](crate::session::Session).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (input parsing helpers)
//! ├── snack.rs    ◄─── List, add, edit, remove
//! ├── purchase.rs ◄─── Coin insertion and vending
//! └── stock.rs    ◄─── Save and load stock files
//! ```
//!
//! Handlers validate what the user typed before calling the service, so a
//! bad answer comes back as a [`ValidationError`] and the menu carries on.

pub mod purchase;
pub mod snack;
pub mod stock;

use vend_core::validation::validate_price;
use vend_core::{Money, SnackKey, ValidationError};

/// Parses a snack number.
pub(crate) fn parse_key(text: &str) -> Result<SnackKey, ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "snack number".to_string(),
        });
    }
    text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "snack number".to_string(),
        reason: format!("'{}' is not a snack number", text),
    })
}

/// Parses a stock count.
pub(crate) fn parse_count(text: &str) -> Result<u32, ValidationError> {
    if text.starts_with('-') {
        return Err(ValidationError::MustBeNonNegative {
            field: "count".to_string(),
        });
    }
    text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "count".to_string(),
        reason: format!("'{}' is not a whole number", text),
    })
}

/// Parses and validates a price such as `0.70`.
pub(crate) fn parse_price(text: &str) -> Result<Money, ValidationError> {
    let price: Money = text.parse()?;
    validate_price(price)?;
    Ok(price)
}
