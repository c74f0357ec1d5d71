//! # App Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal App                       │
//! │                                                                         │
//! │  Menu option                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  AppResult<()>                                                   │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ─────── ValidationError ───────┐                     │  │
//! │  │         │                                  │                     │  │
//! │  │         ▼                                  ▼                     │  │
//! │  │  Service failed? ── VendError ────────── AppError                │  │
//! │  │         │                                  │                     │  │
//! │  │         ▼                                  ▼                     │  │
//! │  │  Success                       is_recoverable()?                 │  │
//! │  │                                  yes: print, back to menu        │  │
//! │  │                                  no:  leave the menu loop        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use vend_core::{ValidationError, VendError};

/// Errors surfaced by the terminal application.
#[derive(Debug, Error)]
pub enum AppError {
    /// A service operation failed.
    #[error(transparent)]
    Vend(#[from] VendError),

    /// User input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The config file could not be read or parsed.
    #[error("Invalid config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// Input ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

/// Result alias for menu commands.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the menu can carry on after showing this error.
    ///
    /// Terminal failures and closed input end the session; everything
    /// else is reported and the menu is shown again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Terminal(_) | AppError::InputClosed)
    }
}
