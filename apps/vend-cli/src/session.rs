//! # Menu Session
//!
//! One run of the terminal menu: the vending service, the console and the
//! configuration, plus the main loop that dispatches to [`crate::commands`].
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Session                                    │
//! │                                                                         │
//! │  start() ── load stockName ── missing/corrupt? ── warn, start empty     │
//! │                                  corrupt? ── keep the file on exit      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  run() ◄──────────────────────────────────────────┐                     │
//! │     │  show menu, read option                     │                     │
//! │     ├── 1 list ── 2 buy ── 3 admin ── 4 save ── 5 load                  │
//! │     │                                             │                     │
//! │     │  recoverable error? print it ───────────────┘                     │
//! │     │                                                                   │
//! │     ▼  0 / end of input                                                 │
//! │  shutdown() ── autoSave and not kept? save stockName                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{info, warn};
use vend_core::{AuditSink, InventoryStore, VendingService};

use crate::config::AppConfig;
use crate::console::Console;
use crate::error::{AppError, AppResult};

const MENU: &[&str] = &[
    "",
    "Vending Machine",
    "---------------",
    "1. List snacks",
    "2. Buy a snack",
    "3. Admin",
    "4. Save stock",
    "5. Load stock",
    "0. Exit",
];

/// An interactive menu over a vending machine.
pub struct Session<S, A, R, W> {
    pub(crate) machine: VendingService<S, A>,
    pub(crate) console: Console<R, W>,
    pub(crate) config: AppConfig,
    /// The startup stock file exists but did not load; auto-save must not
    /// truncate it until the user loads or saves explicitly.
    pub(crate) keep_startup_stock: bool,
}

impl<S, A, R, W> Session<S, A, R, W>
where
    S: InventoryStore,
    A: AuditSink,
    R: BufRead,
    W: Write,
{
    pub fn new(machine: VendingService<S, A>, console: Console<R, W>, config: AppConfig) -> Self {
        Session {
            machine,
            console,
            config,
            keep_startup_stock: false,
        }
    }

    /// Loads the configured stock. Failure leaves the machine empty, and an
    /// existing but unreadable file is protected from auto-save.
    pub fn start(&mut self) -> AppResult<()> {
        let name = self.config.stock_name.clone();
        match self.machine.load_stock(&name) {
            Ok(()) => {
                let count = self.machine.list_snacks()?.len();
                info!(stock = %name, count, "Startup stock loaded");
                self.console
                    .say(format!("Loaded stock '{}' ({} snacks)", name, count))
            }
            Err(err) => {
                warn!(stock = %name, error = %err, "Starting with empty stock");
                self.console
                    .say(format!("{}: starting with an empty machine", err))?;

                if self.machine.stock_exists(&name)? {
                    self.keep_startup_stock = true;
                    self.console.say(format!(
                        "Stock '{}' will not be overwritten on exit",
                        name
                    ))?;
                }
                Ok(())
            }
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            for line in MENU {
                self.console.say(line)?;
            }

            let choice = match self.console.ask("Select an option:") {
                Ok(choice) => choice,
                Err(AppError::InputClosed) => break,
                Err(err) => return Err(err),
            };

            let outcome = match choice.as_str() {
                "1" => self.list_snacks(),
                "2" => self.buy_snack(),
                "3" => self.admin(),
                "4" => self.save_stock(),
                "5" => self.load_stock(),
                "0" => break,
                other => self.console.say(format!("Unknown option '{}'", other)),
            };

            match outcome {
                Ok(()) => {}
                Err(AppError::InputClosed) => break,
                Err(err) if err.is_recoverable() => {
                    self.console.say(err)?;
                }
                Err(err) => return Err(err),
            }
        }

        self.shutdown()
    }

    /// Saves the configured stock when auto-save is on.
    pub fn shutdown(&mut self) -> AppResult<()> {
        let name = self.config.stock_name.clone();
        if self.config.auto_save && self.keep_startup_stock {
            warn!(stock = %name, "Skipping auto-save over unreadable stock");
            self.console
                .say(format!("Stock '{}' was not readable; not saved", name))?;
        } else if self.config.auto_save {
            self.machine.save_stock(&name)?;
            self.console.say(format!("Stock saved to '{}'", name))?;
        }
        self.console.say("Goodbye")
    }

    pub fn into_parts(self) -> (VendingService<S, A>, Console<R, W>) {
        (self.machine, self.console)
    }
}
