//! Destinations that receive each decorated chunk.

use std::fmt::{self, Debug, Formatter};

use anyhow::Result;

use crate::{error::Error, output::Output};

/// Receives each decorated chunk, replacing whatever it held before.
pub trait Sink {
    /// Hands `text` to the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination rejects the text.
    fn copy(&mut self, text: &str) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn copy(&mut self, text: &str) -> Result<()> {
        (**self).copy(text)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn copy(&mut self, text: &str) -> Result<()> {
        (**self).copy(text)
    }
}

/// The system clipboard.
///
/// On some platforms the clipboard is only served while this handle is alive,
/// so keep it until the last paste is done.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Debug for Clipboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clipboard")
            .field("inner", &"<arboard::Clipboard>")
            .finish()
    }
}

impl Clipboard {
    /// Opens the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns `Error::Clipboard` if no clipboard is available, e.g. without a display server.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Sink for Clipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text).map_err(Error::Clipboard)?;
        Ok(())
    }
}

/// Writes each chunk followed by a newline.
impl Sink for Output {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.write_line(text)?;
        self.write_line("\n")
    }
}
