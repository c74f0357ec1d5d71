//! # Validation Module
//!
//! Input validation for snack records and file names.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal menu                                                │
//! │  └── THIS MODULE: name/price/filename rules before calling the service │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: VendingService                                               │
//! │  └── existence checks, funds checks, stock rules                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stock file                                                   │
//! │  └── line parsing rejects malformed records on load                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Snack;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field separator of the stock file format.
pub const FIELD_DELIMITER: &str = "::";

/// Longest accepted snack name.
pub const MAX_NAME_LEN: usize = 64;

/// Validates a snack name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
/// - Must not contain the `::` field delimiter
///
/// ## Example
/// ```rust
/// use vend_core::validation::validate_snack_name;
///
/// assert!(validate_snack_name("Mars").is_ok());
/// assert!(validate_snack_name("   ").is_err());
/// assert!(validate_snack_name("Mars::Bar").is_err());
/// ```
pub fn validate_snack_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    if name.contains(FIELD_DELIMITER) {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: format!("must not contain '{}'", FIELD_DELIMITER),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole snack record.
pub fn validate_snack(snack: &Snack) -> ValidationResult<()> {
    validate_snack_name(&snack.name)?;
    validate_price(snack.price)
}

/// True iff `name` has no `.`, i.e. the user typed a stock name without an
/// extension.
///
/// ## Example
/// ```rust
/// use vend_core::validation::validate_filename;
///
/// assert!(validate_filename("stock"));
/// assert!(!validate_filename("stock.txt"));
/// ```
pub fn validate_filename(name: &str) -> bool {
    !name.contains('.')
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_snack_name() {
        assert!(validate_snack_name("KitKat").is_ok());
        assert!(validate_snack_name("Dairy Milk 45g").is_ok());

        assert!(validate_snack_name("").is_err());
        assert!(validate_snack_name(&"A".repeat(65)).is_err());
        assert_eq!(
            validate_snack_name("a::b"),
            Err(ValidationError::InvalidFormat {
                field: "name".to_string(),
                reason: "must not contain '::'".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_pence(120)).is_ok());
        assert!(validate_price(Money::from_pence(-1)).is_err());
    }

    #[test]
    fn test_validate_snack() {
        assert!(validate_snack(&Snack::new("Mars", 0, Money::from_pence(70))).is_ok());
        assert!(validate_snack(&Snack::new("", 3, Money::from_pence(70))).is_err());
        assert!(validate_snack(&Snack::new("Mars", 3, Money::from_pence(-70))).is_err());
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("stock"));
        assert!(validate_filename(""));
        assert!(!validate_filename("stock.txt"));
        assert!(!validate_filename("."));
        assert!(!validate_filename("../stock"));
    }
}
