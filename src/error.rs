//! Global error handling for filetree
//!
//! Every failure is fatal to a run: nothing here is retried or recovered,
//! errors are only given a shape and a message before they reach `main`.

use std::io;
use thiserror::Error;

/// Global error type for filetree operations
#[derive(Error, Debug)]
pub enum FileTreeError {
    /// File system errors outside of the walk itself
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Listing a directory failed (permission denied, path vanished mid-walk)
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Writing to the output sink failed
    #[error("Output write error: {0}")]
    OutputWrite(#[source] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),
}

/// Specialized Result type for filetree operations
pub type Result<T> = std::result::Result<T, FileTreeError>;

/// Creates a FileTreeError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::FileTreeError::$error_type(format!($($arg)*))
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

// main returns io::Result, keep the kind and the message when crossing that boundary
impl From<FileTreeError> for io::Error {
    fn from(err: FileTreeError) -> Self {
        let kind = match &err {
            FileTreeError::Io(e) | FileTreeError::OutputWrite(e) => e.kind(),
            FileTreeError::Walk(e) => e.io_error().map_or(io::ErrorKind::Other, io::Error::kind),
            FileTreeError::PathNotFound(_) => io::ErrorKind::NotFound,
            FileTreeError::Config(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err.to_string())
    }
}
