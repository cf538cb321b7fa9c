//! Error types for the wordrank library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordRankError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordrank::error::{Result, WordRankError};
//!
//! fn load() -> Result<()> {
//!     Err(WordRankError::config("limit must be a number"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordrank operations.
#[derive(Error, Debug)]
pub enum WordRankError {
    /// I/O errors (input cannot be opened or read, output cannot be written)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (unreadable or malformed configuration file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Memory could not be reserved for a new word entry
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Invalid argument passed to a library function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors carrying extra context from the command line layer
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordRankError.
pub type Result<T> = std::result::Result<T, WordRankError>;

impl WordRankError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordRankError::Config(msg.into())
    }

    /// Create a new resource exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        WordRankError::ResourceExhausted(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordRankError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordRankError::Other(msg.into())
    }

    /// Whether the error comes from the input source rather than the data.
    pub fn is_io(&self) -> bool {
        match self {
            WordRankError::Io(_) => true,
            WordRankError::Anyhow(e) => e.downcast_ref::<io::Error>().is_some(),
            _ => false,
        }
    }
}
