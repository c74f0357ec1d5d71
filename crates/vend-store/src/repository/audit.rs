//! # Audit Log Repository
//!
//! Append-only audit file: one `<timestamp> <operation>` line per mutating
//! service call.
//!
//! ```text
//! 2024-03-09T14:05:07.120+00:00 Added snack 'Mars'
//! 2024-03-09T14:06:31.004+00:00 Mars purchased.
//! 2024-03-09T14:06:58.772+00:00 Twix purchased. Now out of stock
//! ```
//!
//! The file is opened in append mode per record, so earlier lines are never
//! rewritten and a crash loses at most the record being written.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use vend_core::error::{AuditError, AuditResult};
use vend_core::{AuditRecord, AuditSink};

/// [`AuditSink`] writing to a file.
#[derive(Debug, Clone)]
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileAuditSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &AuditRecord) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record)?;
        file.flush()
    }
}

impl AuditSink for FileAuditSink {
    fn log(&mut self, operation: &str) -> AuditResult<()> {
        let record = AuditRecord::now(operation);
        self.append(&record).map_err(|source| AuditError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), operation, "Audit record written");
        Ok(())
    }
}
