//! # Coin Module
//!
//! The fixed denomination table accepted by the coin slot and used for
//! change.
//!
//! ```text
//! ┌────────┬────────┬────────┬────────┬────────┬────────┬────────┬────────┐
//! │  £2    │  £1    │  50p   │  20p   │  10p   │  5p    │  2p    │  1p    │
//! │  2.00  │  1.00  │  0.50  │  0.20  │  0.10  │  0.05  │  0.02  │  0.01  │
//! └────────┴────────┴────────┴────────┴────────┴────────┴────────┴────────┘
//!   largest ──────────────────────────────────────────────────► smallest
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

/// A coin the machine accepts and pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coin {
    TwoPound,
    Pound,
    FiftyPence,
    TwentyPence,
    TenPence,
    FivePence,
    TwoPence,
    Penny,
}

/// Every denomination, largest first.
///
/// Change making walks this table in order; the ordering is load-bearing.
pub const DENOMINATIONS: [Coin; 8] = [
    Coin::TwoPound,
    Coin::Pound,
    Coin::FiftyPence,
    Coin::TwentyPence,
    Coin::TenPence,
    Coin::FivePence,
    Coin::TwoPence,
    Coin::Penny,
];

impl Coin {
    /// Face value.
    pub const fn value(self) -> Money {
        Money::from_pence(match self {
            Coin::TwoPound => 200,
            Coin::Pound => 100,
            Coin::FiftyPence => 50,
            Coin::TwentyPence => 20,
            Coin::TenPence => 10,
            Coin::FivePence => 5,
            Coin::TwoPence => 2,
            Coin::Penny => 1,
        })
    }

    /// Short name as printed on the coin.
    pub const fn label(self) -> &'static str {
        match self {
            Coin::TwoPound => "£2",
            Coin::Pound => "£1",
            Coin::FiftyPence => "50p",
            Coin::TwentyPence => "20p",
            Coin::TenPence => "10p",
            Coin::FivePence => "5p",
            Coin::TwoPence => "2p",
            Coin::Penny => "1p",
        }
    }

    /// Looks up the coin with exactly this face value.
    pub fn from_value(value: Money) -> Option<Coin> {
        DENOMINATIONS.into_iter().find(|c| c.value() == value)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Accepts a face value (`"0.20"`, `"2"`) or a label (`"20p"`, `"£1"`).
impl FromStr for Coin {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let not_a_coin = || ValidationError::InvalidFormat {
            field: "coin".to_string(),
            reason: format!("'{}' is not an accepted coin", text),
        };

        if let Some(coin) = DENOMINATIONS
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(text))
        {
            return Ok(coin);
        }

        let value: Money = text.parse().map_err(|_| not_a_coin())?;
        Coin::from_value(value).ok_or_else(not_a_coin)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
