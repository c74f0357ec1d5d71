//! # Vending Machine Terminal Library
//!
//! Core library for the `vend` binary. `main.rs` only parses arguments and
//! calls [`run`].
//!
//! ## Module Organization
//! ```text
//! vend_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, startup)
//! ├── config.rs       ◄─── AppConfig: file, VEND_* env, defaults
//! ├── console.rs      ◄─── Prompt/answer over BufRead + Write
//! ├── session.rs      ◄─── Main menu loop
//! ├── commands/
//! │   ├── mod.rs      ◄─── Input parsing helpers
//! │   ├── snack.rs    ◄─── List and admin (add/edit/remove)
//! │   ├── purchase.rs ◄─── Coin insertion and vending
//! │   └── stock.rs    ◄─── Save/load stock files
//! └── error.rs        ◄─── AppError for menu commands
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vend_core::VendingService;
use vend_store::{FileAuditSink, FileInventoryStore};

use config::AppConfig;
use console::Console;
use error::AppResult;
use session::Session;

/// Command line arguments for `vend`.
///
/// Flags override the config file and `VEND_*` variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "vend", version, about = "Interactive vending machine")]
pub struct Cli {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding stock files and the audit log
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Stock loaded at startup and saved on exit (no extension)
    #[arg(short, long)]
    pub stock: Option<String>,

    /// Audit log file, relative to the data directory
    #[arg(long)]
    pub audit_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Do not save the stock on exit
    #[arg(long)]
    pub no_auto_save: bool,
}

impl Cli {
    /// Resolves the full configuration: file, then environment, then flags.
    pub fn load_config(&self) -> AppResult<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        Ok(self.apply(config.apply_env()))
    }

    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(stock) = &self.stock {
            config.stock_name = stock.clone();
        }
        if let Some(audit) = &self.audit_file {
            config.audit_file = audit.clone();
        }
        if self.no_auto_save {
            config.auto_save = false;
        }
        config
    }
}

/// Runs the terminal application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: WARN, overridden by RUST_LOG or --log-level              │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults ◄ config file ◄ VEND_* ◄ flags                           │
/// │                                                                         │
/// │  3. Wire the Machine ─────────────────────────────────────────────────► │
/// │     • FileInventoryStore over dataDir                                   │
/// │     • FileAuditSink at dataDir/auditFile                                │
/// │                                                                         │
/// │  4. Run the Menu ─────────────────────────────────────────────────────► │
/// │     • load stockName (empty machine if missing)                         │
/// │     • menu loop on stdin/stdout                                         │
/// │     • auto-save on exit                                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> AppResult<()> {
    init_tracing(&cli.log_level);

    let config = cli.load_config()?;
    info!(
        data_dir = %config.data_dir.display(),
        stock = %config.stock_name,
        auto_save = config.auto_save,
        "Starting vending machine"
    );

    let machine = VendingService::new(
        FileInventoryStore::new(config.store_config()),
        FileAuditSink::new(config.audit_path()),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut session = Session::new(machine, console, config);
    session.start()?;
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show store internals and discarded load/save causes
/// - `RUST_LOG=vend_core=info` - Show successful mutations only
/// - Default: `--log-level`, which defaults to WARN
///
/// Logs go to stderr so they never interleave with menu prompts on stdout.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
