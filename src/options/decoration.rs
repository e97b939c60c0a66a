//! Fixed text wrapped around each chunk at hand-off.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A literal prefix and suffix wrapped around each chunk's text.
///
/// # Examples
///
/// ```
/// use clip_chunks::Decoration;
///
/// let decoration = Decoration::default();
/// assert_eq!(decoration.len(), 11);
/// assert_eq!(decoration.apply("ls -l\n"), "```ansi ls -l\n```");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Decoration {
    prefix: String,
    suffix: String,
}

impl Default for Decoration {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, Self::DEFAULT_SUFFIX)
    }
}

impl Decoration {
    /// Opens an ANSI-highlighted code block.
    pub const DEFAULT_PREFIX: &'static str = "```ansi ";
    /// Closes the code block.
    pub const DEFAULT_SUFFIX: &'static str = "```";

    /// Creates a decoration from literal text.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Creates a decoration with no prefix or suffix.
    pub fn none() -> Self {
        Self::new("", "")
    }

    /// Creates a decoration from text containing escape sequences like `\n` or `\t`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unescape` if either value holds an invalid escape sequence.
    pub fn unescaped(prefix: &str, suffix: &str) -> Result<Self, Error> {
        let unescape = |value: &str| {
            unescaper::unescape(value).map_err(|err| Error::Unescape(err.to_string()))
        };

        Ok(Self::new(unescape(prefix)?, unescape(suffix)?))
    }

    /// Gets the prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Gets the suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Character count of prefix and suffix combined.
    pub fn len(&self) -> usize {
        self.prefix.chars().count() + self.suffix.chars().count()
    }

    /// Whether the decoration adds no text.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Wraps `text` in the prefix and suffix.
    pub fn apply(&self, text: &str) -> String {
        let mut decorated =
            String::with_capacity(self.prefix.len() + text.len() + self.suffix.len());
        decorated.push_str(&self.prefix);
        decorated.push_str(text);
        decorated.push_str(&self.suffix);
        decorated
    }
}
