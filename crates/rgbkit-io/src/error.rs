//! Error types for rgbkit-io

use thiserror::Error;

/// Errors that can occur while reading or writing images
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rgbkit_core::Error),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be decoded
    #[error("failed to decode '{path}': {message}")]
    Decode { path: String, message: String },

    /// The grid could not be encoded
    #[error("failed to encode '{path}': {message}")]
    Encode { path: String, message: String },

    /// No encoder for the requested output
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
