//! Size and pacing limits for chunk hand-off.

use core::fmt::{self, Display, Formatter};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use super::decoration::Decoration;
use crate::error::Error;

/// Message size limit, chunk size and inter-chunk delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limits {
    /// Characters a decorated chunk must fit in.
    pub message_limit: usize,

    /// Explicit characters per chunk, overriding the size derived from `message_limit`.
    pub chunk_size: Option<usize>,

    /// Pause after each hand-off.
    pub delay: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            message_limit: Self::MESSAGE_LIMIT,
            chunk_size: None,
            delay: Self::DELAY,
        }
    }
}

impl Limits {
    /// Chat message limit of 2000 characters.
    pub const MESSAGE_LIMIT: usize = 2000;
    /// Three seconds to paste before the clipboard is overwritten.
    pub const DELAY: Duration = Duration::from_secs(3);

    // Environment variable names for configuration.
    const ENV_LIMIT: &str = "CLIP_CHUNKS_LIMIT";
    const ENV_CHUNK_SIZE: &str = "CLIP_CHUNKS_CHUNK_SIZE";
    const ENV_DELAY: &str = "CLIP_CHUNKS_DELAY";

    /// Creates limits from explicit values.
    pub const fn new(message_limit: usize, chunk_size: Option<usize>, delay: Duration) -> Self {
        Self {
            message_limit,
            chunk_size,
            delay,
        }
    }

    /// Create limits from environment variables if present.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        // Parse environment variables only once and cache the result
        static LIMITS: OnceLock<Limits> = OnceLock::new();

        *LIMITS.get_or_init(|| Self {
            message_limit: Self::parse_env_var(Self::ENV_LIMIT, Self::MESSAGE_LIMIT),
            chunk_size: env::var(Self::ENV_CHUNK_SIZE)
                .ok()
                .and_then(|value| value.parse().ok())
                .filter(|&size| size > 0),
            delay: env::var(Self::ENV_DELAY)
                .ok()
                .and_then(|value| parse_delay(&value).ok())
                .unwrap_or(Self::DELAY),
        })
    }

    /// Set the message size limit.
    #[must_use]
    pub const fn with_message_limit(mut self, limit: usize) -> Self {
        self.message_limit = limit;
        self
    }

    /// Set an explicit chunk size.
    #[must_use]
    pub const fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Set the pause after each hand-off.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Resolves the characters per chunk for a decoration.
    ///
    /// An explicit chunk size wins. Otherwise the chunk is as large as the
    /// message limit allows once the decoration is added.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the chunk size is zero or the decoration leaves
    /// no room within the message limit.
    pub fn chunk_size_for(&self, decoration: &Decoration) -> Result<usize, Error> {
        match self.chunk_size {
            Some(0) => Err(Error::Config("chunk size must be at least 1".to_string())),
            Some(size) => Ok(size),
            None => self
                .message_limit
                .checked_sub(decoration.len())
                .filter(|&size| size > 0)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "decoration of {} chars leaves no room within the {} char limit",
                        decoration.len(),
                        self.message_limit
                    ))
                }),
        }
    }

    /// Parse numeric environment variable with fallback to default value.
    fn parse_env_var<T: FromStr>(name: &str, default: T) -> T {
        env::var(name)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }
}

impl Display for Limits {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Limits {{ message_limit: {}, chunk_size: {}, delay: {}s }}",
            self.message_limit,
            self.chunk_size
                .map_or_else(|| "auto".to_string(), |size| size.to_string()),
            self.delay.as_secs_f64()
        )
    }
}

/// Parses a delay given in (possibly fractional) seconds.
///
/// # Errors
///
/// Returns `Error::Config` for values that are not numbers, negative, or too large.
///
/// # Examples
///
/// ```
/// use clip_chunks::options::limits::parse_delay;
/// use std::time::Duration;
///
/// assert_eq!(parse_delay("1.5").unwrap(), Duration::from_millis(1500));
/// assert!(parse_delay("-1").is_err());
/// ```
pub fn parse_delay(seconds: &str) -> Result<Duration, Error> {
    let invalid = || Error::Config(format!("invalid delay: {seconds:?} (expected seconds)"));

    let secs: f64 = seconds.trim().parse().map_err(|_| invalid())?;
    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}
