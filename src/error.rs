//! Error types for clip-chunks.

use std::io;
use thiserror::Error;

/// Structured error types for clip-chunks
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error with context.
    #[error("{message}: {path}")]
    Io {
        /// File path where error occurred.
        path: String,
        /// Error description.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// UTF-8 decoding error.
    #[error("invalid UTF-8 at byte {byte}: {message}")]
    Utf8 {
        /// Byte position of invalid UTF-8.
        byte: usize,
        /// Error message.
        message: String,
    },

    /// The system clipboard could not be opened or written.
    #[error("clipboard unavailable")]
    Clipboard(#[from] arboard::Error),

    /// Configuration error.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid escape sequence in a decoration.
    #[error("invalid escape sequence: {0}")]
    Unescape(String),

    /// JSON serialization error.
    #[error("JSON serialization failed")]
    JsonSerialization(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub(crate) fn io(
        path: impl Into<String>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
            source,
        }
    }
}
