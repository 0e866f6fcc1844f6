//! Error types for the gridfilter library.
//!
//! All errors are represented by the [`GridFilterError`] enum. Note that
//! malformed user input and malformed serialized defaults are deliberately
//! NOT errors: controllers fall silently back to their empty state for bad
//! input, so only genuine wiring failures (view rendering, pattern
//! compilation, missing setup parameters) surface here.
//!
//! # Examples
//!
//! ```
//! use gridfilter::error::{GridFilterError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GridFilterError::config("selector filter requires a row snapshot"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for gridfilter operations.
#[derive(Error, Debug)]
pub enum GridFilterError {
    /// View-binding errors (template rendering, host view layer).
    #[error("View error: {0}")]
    View(String),

    /// Pattern errors (wildcard-to-regex compilation).
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Configuration errors (column setup, missing parameters).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GridFilterError.
pub type Result<T> = std::result::Result<T, GridFilterError>;

impl GridFilterError {
    /// Create a new view error.
    pub fn view<S: Into<String>>(msg: S) -> Self {
        GridFilterError::View(msg.into())
    }

    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        GridFilterError::Pattern(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GridFilterError::Config(msg.into())
    }
}
