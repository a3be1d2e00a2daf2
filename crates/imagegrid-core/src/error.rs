//! Error types for the image upload grid

use thiserror::Error;

/// Main error type for grid configuration and thumbnail operations
#[derive(Error, Debug)]
pub enum GridError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File extension is not one of the accepted image formats
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias using GridError
pub type GridResult<T> = Result<T, GridError>;
