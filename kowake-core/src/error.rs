//! Library error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced by the chunking library
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Chunk budget that cannot produce progress
    #[error("invalid max_chars {value}: budget must be at least 1 character")]
    InvalidMaxChars {
        /// The rejected budget value
        value: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration or profile error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;
