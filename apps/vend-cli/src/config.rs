//! # Application Configuration
//!
//! Settings for the `vend` binary, resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--data-dir`, `--stock`, ...)
//! 2. Environment variables (`VEND_*`)
//! 3. Config file (`--config vend.json`)
//! 4. Defaults (this file)
//!
//! Configuration is read-only once the menu starts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vend_core::Money;
use vend_store::StoreConfig;

use crate::error::{AppError, AppResult};

/// Application configuration.
///
/// ## Example File
/// ```json
/// {
///   "dataDir": "/var/lib/vend",
///   "stockName": "stock",
///   "auditFile": "audit.txt",
///   "currencySymbol": "£",
///   "autoSave": true
/// }
/// ```
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory holding stock files and the audit log
    pub data_dir: PathBuf,

    /// Stock loaded at startup and saved on exit (no extension)
    pub stock_name: String,

    /// Audit log file, relative to `data_dir` unless absolute
    pub audit_file: PathBuf,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Save the stock back to `stock_name` on exit
    pub auto_save: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("."),
            stock_name: "stock".to_string(),
            audit_file: PathBuf::from("audit.txt"),
            currency_symbol: "£".to_string(),
            auto_save: true,
        }
    }
}

impl AppConfig {
    /// Reads a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            reason: source.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|err| AppError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Applies overrides from the process environment.
    ///
    /// ## Environment Variables
    /// - `VEND_DATA_DIR`: Override data directory
    /// - `VEND_STOCK_NAME`: Override stock name
    /// - `VEND_AUDIT_FILE`: Override audit file
    /// - `VEND_CURRENCY_SYMBOL`: Override currency symbol
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any variable lookup.
    pub fn apply_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("VEND_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup("VEND_STOCK_NAME") {
            self.stock_name = name;
        }

        if let Some(file) = lookup("VEND_AUDIT_FILE") {
            self.audit_file = PathBuf::from(file);
        }

        if let Some(symbol) = lookup("VEND_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        self
    }

    /// Store settings for the data directory.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
    }

    /// Full path of the audit log.
    pub fn audit_path(&self) -> PathBuf {
        self.data_dir.join(&self.audit_file)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use vend_cli::config::AppConfig;
    /// use vend_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_pence(120)), "£1.20");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        if amount.is_negative() {
            format!("-{}{}", self.currency_symbol, amount.abs())
        } else {
            format!("{}{}", self.currency_symbol, amount)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.stock_name, "stock");
        assert_eq!(config.audit_path(), PathBuf::from("./audit.txt"));
        assert!(config.auto_save);
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vend.json");
        fs::write(&path, r#"{ "stockName": "weekend", "autoSave": false }"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.stock_name, "weekend");
        assert!(!config.auto_save);
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn test_from_file_errors() {
        let dir = TempDir::new().unwrap();
        let missing = AppConfig::from_file(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(AppError::Config { .. })));

        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::from_file(&path), Err(AppError::Config { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VEND_DATA_DIR", "/tmp/vend"),
            ("VEND_CURRENCY_SYMBOL", "€"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default().apply_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/vend"));
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.stock_name, "stock");
        assert_eq!(config.audit_path(), PathBuf::from("/tmp/vend/audit.txt"));
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_pence(70)), "£0.70");
        assert_eq!(config.format_currency(Money::from_pence(1205)), "£12.05");
        assert_eq!(config.format_currency(Money::from_pence(-50)), "-£0.50");
    }
}
