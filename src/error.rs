//! Error types for Star Mapper

use thiserror::Error;

use crate::marker::MarkerId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No marker with id {0}")]
    NotFound(MarkerId),

    #[error("Invalid numeric input for {field}: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },

    #[error("Invalid grid size: {0} (must be positive)")]
    InvalidGridSize(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Settings(#[from] toml::de::Error),
}

/// Result type alias for Star Mapper operations
pub type Result<T> = std::result::Result<T, Error>;
