//! # Change Module
//!
//! Funds totalling and greedy change making over [`DENOMINATIONS`].
//!
//! ## Greedy Change
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  make_change(0.88)                                                      │
//! │                                                                         │
//! │   coin   remainder   count = remainder / coin   remainder after         │
//! │   ────   ─────────   ────────────────────────   ───────────────         │
//! │   2.00     0.88              0                      0.88                │
//! │   1.00     0.88              0                      0.88                │
//! │   0.50     0.88              1                      0.38                │
//! │   0.20     0.38              1                      0.18                │
//! │   0.10     0.18              1                      0.08                │
//! │   0.05     0.08              1                      0.03                │
//! │   0.02     0.03              1                      0.01                │
//! │   0.01     0.01              1                      0.00                │
//! │                                                                         │
//! │  → [0.50, 0.20, 0.10, 0.05, 0.02, 0.01]                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The denomination set is canonical, so largest-first is also the minimum
//! coin count. Division is integer division on pence.

use crate::coin::{Coin, DENOMINATIONS};
use crate::money::Money;

/// Total face value of `coins`, starting from exactly `0.00`.
pub fn funds_value(coins: &[Coin]) -> Money {
    coins.iter().map(|coin| coin.value()).sum()
}

/// Whether `coins` cover `price`. Exact funds are sufficient.
pub fn sufficient_funds(coins: &[Coin], price: Money) -> bool {
    funds_value(coins) >= price
}

/// Breaks `amount` into coins, largest first.
///
/// A zero or negative amount yields no coins.
///
/// ## Example
/// ```rust
/// use vend_core::change::make_change;
/// use vend_core::coin::Coin;
/// use vend_core::money::Money;
///
/// let change = make_change(Money::from_pence(8));
/// assert_eq!(change, vec![Coin::FivePence, Coin::TwoPence, Coin::Penny]);
/// ```
pub fn make_change(amount: Money) -> Vec<Coin> {
    let mut change = Vec::new();
    let mut remainder = amount;

    for coin in DENOMINATIONS {
        let count = remainder.whole_units_of(coin.value());
        if count == 0 {
            continue;
        }
        change.extend(std::iter::repeat(coin).take(count as usize));
        remainder -= coin.value() * count;
    }

    change
}

/// Groups coins by denomination, largest first, skipping absent ones.
///
/// ## Example
/// ```rust
/// use vend_core::change::tally;
/// use vend_core::coin::Coin;
///
/// let coins = [Coin::TwentyPence, Coin::Penny, Coin::TwentyPence];
/// assert_eq!(tally(&coins), vec![(Coin::TwentyPence, 2), (Coin::Penny, 1)]);
/// ```
pub fn tally(coins: &[Coin]) -> Vec<(Coin, usize)> {
    DENOMINATIONS
        .into_iter()
        .map(|denomination| {
            let count = coins.iter().filter(|c| **c == denomination).count();
            (denomination, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ten_tenpences_fund_exactly_one_pound() {
        let coins = vec![Coin::TenPence; 10];
        assert_eq!(funds_value(&coins), Money::from_pence(100));
    }

    #[test]
    fn test_funds_value_of_nothing_is_zero() {
        assert_eq!(funds_value(&[]), Money::zero());
    }

    #[test]
    fn test_change_for_one_pound_is_a_single_coin() {
        assert_eq!(make_change(Money::from_pence(100)), vec![Coin::Pound]);
    }

    #[test]
    fn test_change_for_eight_pence() {
        assert_eq!(
            make_change(Money::from_pence(8)),
            vec![Coin::FivePence, Coin::TwoPence, Coin::Penny]
        );
    }

    #[test]
    fn test_change_for_zero_is_empty() {
        assert!(make_change(Money::zero()).is_empty());
    }

    #[test]
    fn test_change_for_negative_is_empty() {
        assert!(make_change(Money::from_pence(-30)).is_empty());
    }

    #[test]
    fn test_change_uses_repeated_large_coins() {
        assert_eq!(
            make_change(Money::from_pence(640)),
            vec![
                Coin::TwoPound,
                Coin::TwoPound,
                Coin::TwoPound,
                Coin::TwentyPence,
                Coin::TwentyPence
            ]
        );
    }

    #[test]
    fn test_change_at_currency_boundaries() {
        // 0.30 and 0.70 are classic float-division traps
        assert_eq!(
            make_change(Money::from_pence(30)),
            vec![Coin::TwentyPence, Coin::TenPence]
        );
        assert_eq!(
            make_change(Money::from_pence(70)),
            vec![Coin::FiftyPence, Coin::TwentyPence]
        );
    }

    #[test]
    fn test_sufficient_funds_boundary() {
        let coins = [Coin::FiftyPence, Coin::TwentyPence];
        assert!(sufficient_funds(&coins, Money::from_pence(70)));
        assert!(sufficient_funds(&coins, Money::from_pence(69)));
        assert!(!sufficient_funds(&coins, Money::from_pence(71)));
        assert!(sufficient_funds(&[], Money::zero()));
    }

    #[test]
    fn test_tally_orders_largest_first() {
        let coins = make_change(Money::from_pence(44));
        assert_eq!(
            tally(&coins),
            vec![(Coin::TwentyPence, 2), (Coin::TwoPence, 2)]
        );
    }

    proptest! {
        #[test]
        fn prop_change_sums_to_amount(pence in 0i64..100_000) {
            let amount = Money::from_pence(pence);
            prop_assert_eq!(funds_value(&make_change(amount)), amount);
        }

        #[test]
        fn prop_change_is_non_increasing(pence in 0i64..100_000) {
            let change = make_change(Money::from_pence(pence));
            for pair in change.windows(2) {
                prop_assert!(pair[0].value() >= pair[1].value());
            }
        }

        #[test]
        fn prop_funds_value_is_exact_sum(picks in proptest::collection::vec(0usize..8, 0..64)) {
            let coins: Vec<Coin> = picks.iter().map(|i| DENOMINATIONS[*i]).collect();
            let expected: i64 = coins.iter().map(|c| c.value().pence()).sum();
            prop_assert_eq!(funds_value(&coins).pence(), expected);
        }
    }
}
