//! # Store Configuration
//!
//! Where stock files live and how a stock name becomes a path.
//!
//! ```text
//! StoreConfig { data_dir: "./data", extension: "txt" }
//!
//!   resolve("stock")   ──►  ./data/stock.txt
//!   resolve("weekend") ──►  ./data/weekend.txt
//! ```
//!
//! Stock names are extension-less by convention (the menu rejects names
//! containing `.`), so the extension is always appended here.

use std::path::PathBuf;

/// File store configuration.
///
/// ## Example
/// ```rust
/// use vend_store::StoreConfig;
///
/// let config = StoreConfig::new("./data").extension("stock");
/// assert!(config.resolve("weekend").ends_with("weekend.stock"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding stock files.
    /// Default: current directory
    pub data_dir: PathBuf,

    /// Extension appended to stock names.
    /// Default: "txt"
    pub extension: String,

    /// Create `data_dir` on save if it is missing.
    /// Default: true
    pub create_dirs: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(".")
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            extension: "txt".to_string(),
            create_dirs: true,
        }
    }

    /// Sets the stock file extension (without the dot).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets whether missing directories are created on save.
    pub fn create_dirs(mut self, create: bool) -> Self {
        self.create_dirs = create;
        self
    }

    /// Path of the stock file called `name`.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", name, self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_appends_extension() {
        let config = StoreConfig::new("/var/vend");
        assert_eq!(config.resolve("stock"), PathBuf::from("/var/vend/stock.txt"));
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new("data").extension("csv").create_dirs(false);
        assert_eq!(config.extension, "csv");
        assert!(!config.create_dirs);
        assert_eq!(config.resolve("a"), PathBuf::from("data/a.csv"));
    }
}
