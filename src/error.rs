//! Error types for the Vortex library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`VortexError`] enum. Indexing and lookup never fail; errors only come from
//! persistence (opening, reading or writing index files) and from the CLI
//! configuration layer.
//!
//! # Examples
//!
//! ```
//! use vortex::error::{Result, VortexError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VortexError::corrupted("term length exceeds remaining input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Vortex operations.
#[derive(Error, Debug)]
pub enum VortexError {
    /// I/O errors (opening, reading or writing index files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The persisted index is truncated or malformed
    #[error("Corrupted index: {0}")]
    Corrupted(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with VortexError.
pub type Result<T> = std::result::Result<T, VortexError>;

impl VortexError {
    /// Create a new corruption error.
    pub fn corrupted<S: Into<String>>(msg: S) -> Self {
        VortexError::Corrupted(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        VortexError::Storage(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        VortexError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VortexError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VortexError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        VortexError::Other(format!("Not found: {}", msg.into()))
    }

    /// Whether this error means the persisted data could not be trusted.
    pub fn is_corruption(&self) -> bool {
        matches!(self, VortexError::Corrupted(_))
    }
}
