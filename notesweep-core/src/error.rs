//! Error types for the scanning pipeline

use thiserror::Error;

/// Error type for scanning operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// I/O error while reading records or writing annotations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scanning operations
pub type Result<T> = std::result::Result<T, ScanError>;
