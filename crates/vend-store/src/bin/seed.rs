//! # Seed Stock Generator
//!
//! Writes a stock file with a realistic selection of snacks for development.
//!
//! ## Usage
//! ```bash
//! # Write ./stock.txt with every sample snack
//! cargo run -p vend-store --bin seed
//!
//! # Custom directory, name and per-snack count
//! cargo run -p vend-store --bin seed -- --dir ./data --name weekend --count 3
//! ```
//!
//! Existing stock files are left alone unless `--force` is given.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use vend_core::error::VendResult;
use vend_core::store::MemoryAuditSink;
use vend_core::validation::validate_filename;
use vend_core::{Money, Snack, VendingService};
use vend_store::{FileInventoryStore, StoreConfig};

/// Sample snacks: (name, price in pence)
const SNACKS: &[(&str, i64)] = &[
    ("Mars", 70),
    ("Snickers", 70),
    ("Twix", 80),
    ("KitKat", 65),
    ("Bounty", 75),
    ("Dairy Milk", 90),
    ("Walkers Ready Salted", 85),
    ("Hula Hoops", 60),
    ("Haribo Starmix", 110),
    ("Water 500ml", 100),
    ("Coca-Cola 330ml", 125),
    ("Irn-Bru 330ml", 115),
];

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Write a sample vending machine stock file")]
struct Args {
    /// Directory for the stock file
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Stock name (no extension)
    #[arg(short, long, default_value = "stock")]
    name: String,

    /// Units of each snack
    #[arg(short, long, default_value_t = 10)]
    count: u32,

    /// Overwrite an existing stock file
    #[arg(long)]
    force: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if !validate_filename(&args.name) {
        eprintln!("Stock name '{}' must not contain '.'", args.name);
        return ExitCode::FAILURE;
    }

    let config = StoreConfig::new(&args.dir);
    let path = config.resolve(&args.name);
    if path.exists() && !args.force {
        println!("⚠ {} already exists", path.display());
        println!("  Skipping seed; pass --force to overwrite.");
        return ExitCode::SUCCESS;
    }

    match seed(config, &args.name, args.count) {
        Ok(written) => {
            println!("✓ Wrote {} snacks to {}", written, path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {}", path.display(), err);
            ExitCode::FAILURE
        }
    }
}

/// Saves every sample snack with `count` units and returns how many records
/// reached the file. Zero-count records are dropped by the save.
fn seed(config: StoreConfig, name: &str, count: u32) -> VendResult<usize> {
    let mut machine = VendingService::new(FileInventoryStore::new(config), MemoryAuditSink::new());
    for (snack, pence) in SNACKS {
        machine.add_snack(Snack::new(*snack, count, Money::from_pence(*pence)))?;
    }
    machine.save_stock(name)?;

    Ok(machine
        .list_snacks()?
        .values()
        .filter(|snack| snack.in_stock())
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_seed_writes_every_snack() {
        let dir = TempDir::new().unwrap();
        let written = seed(StoreConfig::new(dir.path()), "stock", 3).unwrap();

        assert_eq!(written, SNACKS.len());
        let text = fs::read_to_string(dir.path().join("stock.txt")).unwrap();
        assert_eq!(text.lines().count(), SNACKS.len());
        assert!(text.starts_with("Mars::3::0.70\n"));
    }

    #[test]
    fn test_zero_count_reports_nothing_written() {
        let dir = TempDir::new().unwrap();
        let written = seed(StoreConfig::new(dir.path()), "stock", 0).unwrap();

        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(dir.path().join("stock.txt")).unwrap(), "");
    }
}
