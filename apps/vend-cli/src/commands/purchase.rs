//! # Purchase Command
//!
//! Menu option 2: choose a snack, feed coins, collect the snack and change.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Buying a Snack                                   │
//! │                                                                         │
//! │  Snack number ──► SnackNotFound / OutOfStock? ──► back to menu          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Coin: 1.00 ◄──┐   unknown coin? reprompt                               │
//! │  Coin: 20p  ───┘                                                        │
//! │  Coin: done                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  VendingService::vend(key, coins)                                       │
//! │       ├── Ok(Vend)              → "Enjoy your Mars", change tally       │
//! │       └── InsufficientFunds     → every coin handed back                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::debug;
use vend_core::change::{funds_value, tally};
use vend_core::{AuditSink, Coin, InventoryStore, VendError, DENOMINATIONS};

use super::parse_key;
use crate::error::AppResult;
use crate::session::Session;

impl<S, A, R, W> Session<S, A, R, W>
where
    S: InventoryStore,
    A: AuditSink,
    R: BufRead,
    W: Write,
{
    /// Menu option 2.
    pub(crate) fn buy_snack(&mut self) -> AppResult<()> {
        if !self.machine.validate_snack_selection(1)? {
            return self.console.say("Sorry, the machine is empty");
        }

        let key = parse_key(&self.console.ask("Snack number:")?)?;
        let snack = self
            .machine
            .get_snack(key)?
            .ok_or(VendError::SnackNotFound(key))?;
        if !snack.in_stock() {
            return Err(VendError::OutOfStock(key).into());
        }

        self.console.say(format!(
            "{} costs {}",
            snack.name,
            self.config.format_currency(snack.price)
        ))?;

        let coins = self.insert_coins()?;
        match self.machine.vend(key, &coins) {
            Ok(vend) => {
                self.console.say(format!("Enjoy your {}", vend.snack_name))?;
                if vend.change.is_empty() {
                    self.console.say("No change")
                } else {
                    self.console.say(format!(
                        "Your change ({}):",
                        self.config.format_currency(vend.change_value())
                    ))?;
                    self.show_coins(&vend.change)
                }
            }
            Err(VendError::InsufficientFunds { price, inserted }) => {
                self.console.say(format!(
                    "Insufficient funds: {} inserted, {} needed",
                    self.config.format_currency(inserted),
                    self.config.format_currency(price)
                ))?;
                if coins.is_empty() {
                    return Ok(());
                }
                self.console.say("Returning your coins:")?;
                self.show_coins(&coins)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Reads coins one per line until `done`.
    fn insert_coins(&mut self) -> AppResult<Vec<Coin>> {
        let accepted: Vec<String> = DENOMINATIONS.iter().map(|coin| coin.to_string()).collect();
        self.console.say(format!(
            "Insert coins one at a time ({}), then 'done'",
            accepted.join(", ")
        ))?;

        let mut coins = Vec::new();
        loop {
            let prompt = format!(
                "Inserted {}. Coin:",
                self.config.format_currency(funds_value(&coins))
            );
            let answer = self.console.ask(&prompt)?;
            if answer.eq_ignore_ascii_case("done") {
                return Ok(coins);
            }

            match answer.parse::<Coin>() {
                Ok(coin) => coins.push(coin),
                Err(err) => {
                    debug!(input = %answer, error = %err, "Coin rejected");
                    self.console.say(format!("'{}' is not an accepted coin", answer))?;
                }
            }
        }
    }

    fn show_coins(&mut self, coins: &[Coin]) -> AppResult<()> {
        for (coin, count) in tally(coins) {
            let face = self.config.format_currency(coin.value());
            self.console.say(format!("  {} x {}", count, face))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::{run_session, session_with, stocked_store};
    use vend_core::store::MemoryInventoryStore;
    use vend_core::{Money, Snack};

    #[test]
    fn test_buy_with_change() {
        let (machine, screen) =
            run_session(session_with(stocked_store(), "2\n1\n1.00\n20p\ndone\n0\n"));

        assert!(screen.contains("Mars costs £0.70"));
        assert!(screen.contains("Inserted £1.20. Coin:"));
        assert!(screen.contains("Enjoy your Mars"));
        assert!(screen.contains("Your change (£0.50):"));
        assert!(screen.contains("  1 x £0.50"));
        assert_eq!(machine.get_snack(1).unwrap().unwrap().count, 4);
        assert_eq!(machine.audit().descriptions(), vec!["Mars purchased."]);
    }

    #[test]
    fn test_unknown_coin_is_reprompted() {
        let (machine, screen) =
            run_session(session_with(stocked_store(), "2\n2\n3p\n50p\n20p\n10p\ndone\n0\n"));

        assert!(screen.contains("'3p' is not an accepted coin"));
        assert!(screen.contains("Enjoy your Twix"));
        assert!(screen.contains("No change"));
        assert!(!machine.snack_exists(2).unwrap());
        assert_eq!(
            machine.audit().descriptions(),
            vec!["Twix purchased. Now out of stock"]
        );
    }

    #[test]
    fn test_insufficient_funds_returns_coins() {
        let (machine, screen) =
            run_session(session_with(stocked_store(), "2\n1\n20p\n20p\n10p\ndone\n0\n"));

        assert!(screen.contains("Insufficient funds: £0.50 inserted, £0.70 needed"));
        assert!(screen.contains("Returning your coins:"));
        assert!(screen.contains("  2 x £0.20"));
        assert!(screen.contains("  1 x £0.10"));
        assert_eq!(machine.get_snack(1).unwrap().unwrap().count, 5);
        assert!(machine.audit().descriptions().is_empty());
    }

    #[test]
    fn test_sold_out_snack_takes_no_coins() {
        let store = MemoryInventoryStore::new().with_snapshot(
            "stock",
            vec![Snack::new("Mars", 5, Money::from_pence(70))],
        );
        let (machine, screen) =
            run_session(session_with(store, "3\n1\nGhost\n0\n0.70\n2\n2\n0\n"));

        assert!(screen.contains("Snack out of stock: 2"));
        assert!(!screen.contains("Ghost costs"));
        assert!(machine.snack_exists(2).unwrap());
        assert_eq!(machine.audit().descriptions(), vec!["Added snack 'Ghost'"]);
    }

    #[test]
    fn test_unknown_snack_and_empty_machine() {
        let (_, screen) = run_session(session_with(stocked_store(), "2\n9\n0\n"));
        assert!(screen.contains("Snack not found: 9"));

        let (_, screen) = run_session(session_with(MemoryInventoryStore::new(), "2\n0\n"));
        assert!(screen.contains("Sorry, the machine is empty"));
    }
}
