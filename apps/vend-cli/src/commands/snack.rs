//! # Snack Commands
//!
//! Listing and the admin submenu (add, edit, remove).
//!
//! ## Edit Flow
//! ```text
//! Snack number: 2
//! Editing 'Twix' (count 1, price £0.80). Leave blank to keep.
//! Name:            ◄── blank keeps "Twix"
//! Count: 12
//! Price: 0.85
//! Updated snack 2
//! ```

use std::io::{BufRead, Write};

use tracing::debug;
use vend_core::validation::validate_snack;
use vend_core::{AuditSink, InventoryStore, Snack, VendError};

use super::{parse_count, parse_key, parse_price};
use crate::error::AppResult;
use crate::session::Session;

const ADMIN_MENU: &[&str] = &[
    "1. Add snack",
    "2. Edit snack",
    "3. Remove snack",
    "0. Back",
];

impl<S, A, R, W> Session<S, A, R, W>
where
    S: InventoryStore,
    A: AuditSink,
    R: BufRead,
    W: Write,
{
    /// Menu option 1: every snack in key order.
    pub(crate) fn list_snacks(&mut self) -> AppResult<()> {
        let snacks = self.machine.list_snacks()?;
        if snacks.is_empty() {
            return self.console.say("No snacks in stock");
        }

        self.console
            .say(format!("{:>4}  {:<24} {:>8} {:>6}", "No.", "Snack", "Price", "Count"))?;
        for (key, snack) in &snacks {
            let price = self.config.format_currency(snack.price);
            self.console.say(format!(
                "{:>4}  {:<24} {:>8} {:>6}",
                key, snack.name, price, snack.count
            ))?;
        }
        Ok(())
    }

    /// Menu option 3.
    pub(crate) fn admin(&mut self) -> AppResult<()> {
        for line in ADMIN_MENU {
            self.console.say(line)?;
        }

        let choice = self.console.ask("Admin option:")?;
        match choice.as_str() {
            "1" => self.add_snack(),
            "2" => self.edit_snack(),
            "3" => self.remove_snack(),
            "0" | "" => Ok(()),
            other => self.console.say(format!("Unknown option '{}'", other)),
        }
    }

    fn add_snack(&mut self) -> AppResult<()> {
        let name = self.console.ask("Name:")?;
        if self.machine.snack_name_exists(&name)? {
            return self
                .console
                .say(format!("A snack named '{}' already exists", name));
        }

        let count = parse_count(&self.console.ask("Count:")?)?;
        let price = parse_price(&self.console.ask("Price:")?)?;

        let snack = Snack::new(name, count, price);
        validate_snack(&snack)?;

        let name = snack.name.clone();
        let key = self.machine.add_snack(snack)?;
        self.console.say(format!("Added '{}' as snack {}", name, key))
    }

    fn edit_snack(&mut self) -> AppResult<()> {
        let key = parse_key(&self.console.ask("Snack number:")?)?;
        let current = self
            .machine
            .get_snack(key)?
            .ok_or(VendError::SnackNotFound(key))?;

        self.console.say(format!(
            "Editing '{}' (count {}, price {}). Leave blank to keep.",
            current.name,
            current.count,
            self.config.format_currency(current.price)
        ))?;

        let name = self.console.ask("Name:")?;
        let name = if name.is_empty() { current.name } else { name };

        let count = self.console.ask("Count:")?;
        let count = if count.is_empty() {
            current.count
        } else {
            parse_count(&count)?
        };

        let price = self.console.ask("Price:")?;
        let price = if price.is_empty() {
            current.price
        } else {
            parse_price(&price)?
        };

        let snack = Snack::new(name, count, price);
        validate_snack(&snack)?;
        debug!(key, name = %snack.name, "Editing snack from menu");

        self.machine.edit_snack(key, snack)?;
        self.console.say(format!("Updated snack {}", key))
    }

    fn remove_snack(&mut self) -> AppResult<()> {
        let key = parse_key(&self.console.ask("Snack number:")?)?;
        let snack = self
            .machine
            .get_snack(key)?
            .ok_or(VendError::SnackNotFound(key))?;

        self.machine.remove_snack(key)?;
        self.console.say(format!("Removed '{}'", snack.name))
    }
}
