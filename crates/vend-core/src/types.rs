//! # Domain Types
//!
//! Core domain types used throughout the vending machine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Snack       │   │   AuditRecord   │   │      Vend       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  timestamp      │   │  key            │       │
//! │  │  count (u32)    │   │  description    │   │  price/inserted │       │
//! │  │  price (Money)  │   │                 │   │  change (coins) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  SnackKey: u32 assigned by the inventory store, insertion order        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::money::Money;

/// Identity of a snack within one inventory.
///
/// Assigned by the store, monotonically increasing, never reused while the
/// store is alive.
pub type SnackKey = u32;

// =============================================================================
// Snack
// =============================================================================

/// A stocked snack line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snack {
    /// Display name; also the audit label.
    pub name: String,

    /// Units left in the machine.
    pub count: u32,

    /// Unit price.
    pub price: Money,
}

impl Snack {
    pub fn new(name: impl Into<String>, count: u32, price: Money) -> Self {
        Snack {
            name: name.into(),
            count,
            price,
        }
    }

    /// Whether this snack can still be sold.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.count > 0
    }

    /// The same snack with one unit sold.
    pub fn with_one_sold(&self) -> Self {
        Snack {
            count: self.count.saturating_sub(1),
            ..self.clone()
        }
    }
}

// =============================================================================
// Audit Record
// =============================================================================

/// One line of the audit trail.
///
/// Rendered as `<timestamp> <description>` with an RFC 3339 timestamp at
/// millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: DateTime<Local>,
    pub description: String,
}

impl AuditRecord {
    /// Stamps `description` with the current local time.
    pub fn now(description: impl Into<String>) -> Self {
        AuditRecord {
            timestamp: Local::now(),
            description: description.into(),
        }
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
            self.description
        )
    }
}

// =============================================================================
// Vend
// =============================================================================

/// Outcome of a completed coin purchase.
///
/// ## Invariant
/// `funds_value(change) == inserted - price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vend {
    pub key: SnackKey,
    pub snack_name: String,
    pub price: Money,
    pub inserted: Money,
    pub change: Vec<Coin>,
}

impl Vend {
    /// Total value handed back.
    pub fn change_value(&self) -> Money {
        self.change.iter().map(|c| c.value()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_with_one_sold() {
        let mars = Snack::new("Mars", 5, Money::from_pence(70));
        let after = mars.with_one_sold();
        assert_eq!(after.count, 4);
        assert_eq!(after.name, "Mars");
        assert_eq!(after.price, Money::from_pence(70));

        let empty = Snack::new("Twix", 0, Money::from_pence(80));
        assert_eq!(empty.with_one_sold().count, 0);
        assert!(!empty.in_stock());
    }

    #[test]
    fn test_audit_record_display() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let record = AuditRecord {
            timestamp,
            description: "Added snack 'Mars'".to_string(),
        };
        let line = record.to_string();
        assert!(line.starts_with("2024-03-09T14:05:07.000"));
        assert!(line.ends_with(" Added snack 'Mars'"));
    }

    #[test]
    fn test_snack_serializes_price_as_pence() {
        let mars = Snack::new("Mars", 5, Money::from_pence(70));
        let json = serde_json::to_string(&mars).unwrap();
        assert_eq!(json, r#"{"name":"Mars","count":5,"price":70}"#);
    }
}
