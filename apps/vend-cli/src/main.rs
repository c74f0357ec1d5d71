//! # Vending Machine Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          vend (terminal)                                │
//! │                                                                         │
//! │  main.rs ────► Parses arguments, reports fatal errors                   │
//! │  lib.rs ─────► Logging, configuration, wiring                           │
//! │  session.rs ─► Menu loop                                                │
//! │  commands/ ──► list, buy, admin, save, load                             │
//! │                                                                         │
//! │            ┌─────────────────────┐   ┌─────────────────────┐            │
//! │            │  <dataDir>/         │   │  <dataDir>/         │            │
//! │            │  <stockName>.txt    │   │  audit.txt          │            │
//! │            └─────────────────────┘   └─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use vend_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match vend_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vend: {}", err);
            ExitCode::FAILURE
        }
    }
}
