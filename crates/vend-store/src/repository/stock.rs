//! # Stock File Repository
//!
//! The flat-file [`InventoryStore`].
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stock.txt                                                              │
//! │                                                                         │
//! │  line 1   Mars::5::0.70        → key 1                                  │
//! │  line 2   Twix::0::0.80        → dropped (count <= 0), key 2 consumed   │
//! │  line 3   KitKat::2::1.20      → key 3                                  │
//! │                                                                         │
//! │  next key after load: 4                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Saves write records in key order and skip anything with a zero count.
//! Loads are all-or-nothing: a single malformed line leaves the in-memory
//! inventory untouched.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;
use vend_core::error::{StoreError, StoreResult};
use vend_core::validation::{validate_price, FIELD_DELIMITER};
use vend_core::{Inventory, InventoryStore, Money, Snack, SnackKey};

use crate::config::StoreConfig;

/// Inventory held in memory and snapshotted to `name::count::price` files.
///
/// ## Usage
/// ```rust,no_run
/// use vend_core::InventoryStore;
/// use vend_store::{FileInventoryStore, StoreConfig};
///
/// let mut store = FileInventoryStore::new(StoreConfig::new("./data"));
/// store.load("stock")?;           // reads ./data/stock.txt
/// let snacks = store.list()?;
/// # Ok::<(), vend_core::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileInventoryStore {
    config: StoreConfig,
    inventory: Inventory,
}

impl FileInventoryStore {
    /// Creates an empty store; nothing is read until [`InventoryStore::load`].
    pub fn new(config: StoreConfig) -> Self {
        FileInventoryStore {
            config,
            inventory: Inventory::new(),
        }
    }

    fn read_records(path: &Path) -> StoreResult<(BTreeMap<SnackKey, Snack>, SnackKey)> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut snacks = BTreeMap::new();
        let mut line_count: SnackKey = 0;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            line_count = SnackKey::try_from(line_no).map_err(|_| StoreError::Malformed {
                line: line_no,
                reason: "too many records".to_string(),
            })?;

            if line.trim().is_empty() {
                continue;
            }

            if let Some(snack) = parse_record(line, line_no)? {
                snacks.insert(line_count, snack);
            }
        }

        Ok((snacks, line_count + 1))
    }
}

impl InventoryStore for FileInventoryStore {
    fn load(&mut self, source: &str) -> StoreResult<()> {
        let path = self.config.resolve(source);
        debug!(path = %path.display(), "Loading stock file");

        let (snacks, next_key) = Self::read_records(&path)?;
        debug!(records = snacks.len(), next_key, "Stock file parsed");

        self.inventory.replace_all(snacks, next_key);
        Ok(())
    }

    fn save(&self, source: &str) -> StoreResult<()> {
        let path = self.config.resolve(source);
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };

        if self.config.create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let mut lines = Vec::with_capacity(self.inventory.len());
        for (line_no, (_, snack)) in self
            .inventory
            .iter()
            .filter(|(_, snack)| snack.in_stock())
            .enumerate()
        {
            lines.push(format_record(snack, line_no + 1)?);
        }

        let file = File::create(&path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        for line in &lines {
            writeln!(out, "{}", line).map_err(io_err)?;
        }
        out.flush().map_err(io_err)?;

        debug!(path = %path.display(), records = lines.len(), "Stock file written");
        Ok(())
    }

    fn exists(&self, source: &str) -> StoreResult<bool> {
        Ok(self.config.resolve(source).is_file())
    }

    fn list(&self) -> StoreResult<BTreeMap<SnackKey, Snack>> {
        Ok(self.inventory.snapshot())
    }

    fn get(&self, key: SnackKey) -> StoreResult<Option<Snack>> {
        Ok(self.inventory.get(key).cloned())
    }

    fn add(&mut self, snack: Snack) -> StoreResult<SnackKey> {
        Ok(self.inventory.insert(snack))
    }

    fn remove(&mut self, key: SnackKey) -> StoreResult<bool> {
        let removed = self.inventory.remove(key).is_some();
        if !removed {
            debug!(key, "Snack does not exist to be removed");
        }
        Ok(removed)
    }

    fn edit(&mut self, key: SnackKey, snack: Snack) -> StoreResult<bool> {
        let replaced = self.inventory.replace(key, snack);
        if !replaced {
            debug!(key, "Snack does not exist to be edited");
        }
        Ok(replaced)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.inventory.len())
    }

    fn contains(&self, key: SnackKey) -> StoreResult<bool> {
        Ok(self.inventory.contains(key))
    }
}

// =============================================================================
// Record Codec
// =============================================================================

/// Parses one `name::count::price` line.
///
/// Returns `Ok(None)` for records with `count <= 0`.
pub fn parse_record(line: &str, line_no: usize) -> StoreResult<Option<Snack>> {
    let malformed = |reason: String| StoreError::Malformed {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let [name, count, price] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 3 fields separated by '{}', found {}",
            FIELD_DELIMITER,
            fields.len()
        )));
    };

    let count: i64 = count
        .trim()
        .parse()
        .map_err(|_| malformed(format!("count '{}' is not an integer", count)))?;
    let price: Money = price
        .parse()
        .map_err(|err| malformed(format!("price: {}", err)))?;
    validate_price(price).map_err(|_| malformed("price must not be negative".to_string()))?;

    if count <= 0 {
        return Ok(None);
    }

    let count = u32::try_from(count).map_err(|_| malformed(format!("count {} is too large", count)))?;
    Ok(Some(Snack::new(*name, count, price)))
}

/// Renders one record. Names containing the delimiter cannot round-trip and
/// are refused.
pub fn format_record(snack: &Snack, line_no: usize) -> StoreResult<String> {
    if snack.name.contains(FIELD_DELIMITER) {
        return Err(StoreError::Malformed {
            line: line_no,
            reason: format!("name '{}' contains '{}'", snack.name, FIELD_DELIMITER),
        });
    }

    Ok(format!(
        "{}{d}{}{d}{}",
        snack.name,
        snack.count,
        snack.price,
        d = FIELD_DELIMITER
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
