//! Configuration options for chunked hand-off.
//!
//! This module provides the [`Options`] struct, a unified container for all
//! clip-chunks settings.
//!
//! # Structure
//!
//! - **Limits** ([`Limits`]): Message size limit, explicit chunk size and delay
//! - **Decoration** ([`Decoration`]): Prefix and suffix wrapped around each chunk
//! - **Format** ([`Format`]): Verbose output format (text, JSON)
//!
//! # Usage
//!
//! ```
//! use clip_chunks::{Decoration, Options};
//! use std::time::Duration;
//!
//! // Default options fit a decorated chunk in 2000 characters
//! let options = Options::default();
//! assert_eq!(options.chunk_size().unwrap(), 1989);
//!
//! // With specific settings
//! let options = Options::default()
//!     .with_decoration(Decoration::none())
//!     .with_delay(Duration::ZERO);
//! assert_eq!(options.chunk_size().unwrap(), 2000);
//! ```
//!
//! # Environment Variables
//!
//! Defaults can be overridden via environment variables:
//!
//! - `CLIP_CHUNKS_LIMIT`: Message size limit in characters (default: 2000)
//! - `CLIP_CHUNKS_CHUNK_SIZE`: Characters per chunk (default: limit minus decoration)
//! - `CLIP_CHUNKS_DELAY`: Seconds to pause after each chunk (default: 3)

pub mod decoration;
pub mod limits;
pub mod serialization;

use self::decoration::Decoration;
use self::limits::Limits;
use self::serialization::Format;
use crate::error::Error;
use std::time::Duration;

/// Unified configuration for chunked hand-off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Size and pacing limits.
    limits: Limits,

    /// Prefix and suffix around each chunk.
    decoration: Decoration,

    /// Verbose output format.
    format: Format,
}

impl Options {
    /// Creates a new `Options` with custom limits, decoration and format.
    #[must_use]
    pub const fn new(limits: Limits, decoration: Decoration, format: Format) -> Self {
        Self {
            limits,
            decoration,
            format,
        }
    }

    /// Set limits while preserving other options.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the decoration.
    #[must_use]
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Set the verbose output format.
    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set an explicit chunk size.
    #[must_use]
    pub const fn with_chunk_size(mut self, size: usize) -> Self {
        self.limits = self.limits.with_chunk_size(size);
        self
    }

    /// Set the message size limit.
    #[must_use]
    pub const fn with_message_limit(mut self, limit: usize) -> Self {
        self.limits = self.limits.with_message_limit(limit);
        self
    }

    /// Set the pause after each hand-off.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.limits = self.limits.with_delay(delay);
        self
    }

    /// Get the limits.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Get the decoration.
    #[must_use]
    pub const fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Get the verbose output format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the pause after each hand-off.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.limits.delay
    }

    /// Resolve the characters per chunk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the chunk size is zero or the decoration
    /// leaves no room within the message limit.
    pub fn chunk_size(&self) -> Result<usize, Error> {
        self.limits.chunk_size_for(&self.decoration)
    }
}
