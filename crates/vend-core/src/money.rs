//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  At the coin slot:                                                      │
//! │    ten 10p coins must be EXACTLY £1.00, or the machine refuses          │
//! │    a £1.00 snack it was paid for in full.                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    10 × 10 pence = 100 pence, always                                    │
//! │    Change counting is integer division, never a float round trip        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::money::Money;
//!
//! // Create from pence (preferred)
//! let price = Money::from_pence(70); // £0.70
//!
//! // Or parse the two-decimal text form used in stock files
//! let parsed: Money = "0.70".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! // Arithmetic operations
//! let total = price + Money::from_pence(50); // £1.20
//! assert_eq!(total.to_string(), "1.20");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: `inserted - price` may go negative before it is checked
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Exactly two decimals**: the text form is always `<units>.<2 digits>`
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Snack.price ──┬──► stock file "Mars::5::0.70"                          │
/// │                │                                                        │
/// │                └──► sufficient_funds(coins, price)                      │
/// │                                                                         │
/// │  Coin.value() ──► funds_value(coins) ──► inserted - price ──► change    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let price = Money::from_pence(120); // Represents £1.20
    /// assert_eq!(price.pence(), 120);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion, truncated toward zero.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(1099).pence_part(), 99);
    /// assert_eq!(Money::from_pence(-550).pence_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// How many whole `unit`s fit into this amount.
    ///
    /// Exact integer division on pence. Returns 0 for a non-positive
    /// amount or a non-positive unit.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let remainder = Money::from_pence(90);
    /// assert_eq!(remainder.whole_units_of(Money::from_pence(20)), 4);
    /// ```
    #[inline]
    pub const fn whole_units_of(&self, unit: Money) -> i64 {
        if self.0 <= 0 || unit.0 <= 0 {
            0
        } else {
            self.0 / unit.0
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses the two-decimal text form: `"0.70"`, `"1.2"`, `"3"`, `"-0.05"`.
///
/// ## Rules
/// - Optional leading `-`
/// - At least one integer digit
/// - Optional `.` followed by one or two digits
///
/// Anything else, including a third decimal digit, is rejected rather than
/// rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major_text, minor_text) = match digits.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (digits, None),
        };

        if major_text.is_empty() || !major_text.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }

        let major: i64 = major_text
            .parse()
            .map_err(|_| invalid("amount is too large"))?;

        let minor = match minor_text {
            None => 0,
            Some(m) if m.is_empty() || m.len() > 2 => {
                return Err(invalid("expected one or two digits after the decimal point"));
            }
            Some(m) if !m.chars().all(|c| c.is_ascii_digit()) => {
                return Err(invalid("expected digits after the decimal point"));
            }
            // "1.2" means 1.20, not 1.02
            Some(m) if m.len() == 1 => m.parse::<i64>().map_err(|_| invalid("bad minor unit"))? * 10,
            Some(m) => m.parse::<i64>().map_err(|_| invalid("bad minor unit"))?,
        };

        let pence = major
            .checked_mul(100)
            .and_then(|p| p.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -pence } else { pence }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the plain two-decimal form (`1.20`), which is also the stock
/// file form. Currency symbols are added by the front end.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a coin count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing starts at exactly `0.00`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pence(70).to_string(), "0.70");
        assert_eq!(Money::from_pence(500).to_string(), "5.00");
        assert_eq!(Money::from_pence(-550).to_string(), "-5.50");
        assert_eq!(Money::from_pence(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("0.70".parse::<Money>().unwrap().pence(), 70);
        assert_eq!("1.2".parse::<Money>().unwrap().pence(), 120);
        assert_eq!("3".parse::<Money>().unwrap().pence(), 300);
        assert_eq!(" 12.05 ".parse::<Money>().unwrap().pence(), 1205);
        assert_eq!("-0.05".parse::<Money>().unwrap().pence(), -5);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("1.".parse::<Money>().is_err());
        assert!("1.234".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1,20".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(500);

        assert_eq!((a + b).pence(), 1500);
        assert_eq!((a - b).pence(), 500);
        assert_eq!((a * 3).pence(), 3000);
    }

    #[test]
    fn test_sum_of_ten_tenpences_is_exactly_one_pound() {
        let total: Money = std::iter::repeat(Money::from_pence(10)).take(10).sum();
        assert_eq!(total, Money::from_pence(100));
        assert_eq!(total.to_string(), "1.00");
    }

    #[test]
    fn test_whole_units_of() {
        let ninety = Money::from_pence(90);
        assert_eq!(ninety.whole_units_of(Money::from_pence(50)), 1);
        assert_eq!(ninety.whole_units_of(Money::from_pence(20)), 4);
        assert_eq!(Money::zero().whole_units_of(Money::from_pence(1)), 0);
        assert_eq!(Money::from_pence(-10).whole_units_of(Money::from_pence(1)), 0);
        assert_eq!(ninety.whole_units_of(Money::zero()), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_pence(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().pence(), 100);
    }
}
