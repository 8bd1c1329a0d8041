//! Error handling for mergecode
//!
//! Two tiers: `ReadError` is the recoverable per-file failure the collector
//! turns into a warning, `MergeError` is everything that ends the run.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Crate-wide error type for unrecoverable failures
#[derive(Error, Debug)]
pub enum MergeError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Traversal errors at the scan root
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),
}

/// Specialized Result type for mergecode operations
pub type Result<T> = std::result::Result<T, MergeError>;

/// Why a single file could not be merged
#[derive(Error, Debug)]
pub enum ReadError {
    /// Contents are not valid UTF-8
    #[error("not valid UTF-8 text: {0}")]
    Decode(#[from] FromUtf8Error),

    /// Open or read failed
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Creates a MergeError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::MergeError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow `?` on collector results inside io::Result functions
impl From<MergeError> for io::Error {
    fn from(err: MergeError) -> Self {
        match err {
            MergeError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
