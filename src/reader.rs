//! Incremental UTF-8 character reader.

use std::{io::BufRead, mem};

use anyhow::{Context, Result};

use crate::error::Error;

/// Reads whole characters from a buffered byte source, validating UTF-8 as it goes.
///
/// Bytes are pulled from the source one buffer at a time, so at most one buffer
/// of decoded text is held beyond what the caller asks for.
#[derive(Debug)]
pub struct CharReader<R> {
    inner: R,
    /// Decoded text not yet handed out.
    pending: String,
    /// Number of characters in `pending`.
    pending_chars: usize,
    /// Leading bytes of a UTF-8 sequence split across buffer reads.
    partial: Vec<u8>,
    /// Bytes consumed from `inner` so far.
    consumed: usize,
    eof: bool,
}

impl<R: BufRead> CharReader<R> {
    /// Wraps a buffered byte source.
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            pending: String::new(),
            pending_chars: 0,
            partial: Vec::new(),
            consumed: 0,
            eof: false,
        }
    }

    /// Reads up to `count` characters. Fewer are returned only at the end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the input is not valid UTF-8.
    pub fn read_chars(&mut self, count: usize) -> Result<String> {
        while self.pending_chars < count && !self.eof {
            self.fill()?;
        }

        Ok(self.take(count))
    }

    /// Consumes the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Splits the first `count` characters off `pending`.
    fn take(&mut self, count: usize) -> String {
        if count >= self.pending_chars {
            self.pending_chars = 0;
            return mem::take(&mut self.pending);
        }

        let split = self
            .pending
            .char_indices()
            .nth(count)
            .map_or(self.pending.len(), |(index, _)| index);
        let rest = self.pending.split_off(split);
        self.pending_chars -= count;

        mem::replace(&mut self.pending, rest)
    }

    /// Pulls one buffer from the source and decodes it.
    fn fill(&mut self) -> Result<()> {
        let buf = self.inner.fill_buf().context("failed to read input")?;

        if buf.is_empty() {
            self.eof = true;

            if !self.partial.is_empty() {
                return Err(Error::Utf8 {
                    byte: self.consumed - self.partial.len(),
                    message: "incomplete UTF-8 sequence at end of input".to_string(),
                }
                .into());
            }

            return Ok(());
        }

        let len = buf.len();
        self.partial.extend_from_slice(buf);
        self.inner.consume(len);
        self.consumed += len;

        self.decode()
    }

    /// Moves every complete character in `partial` into `pending`.
    fn decode(&mut self) -> Result<()> {
        let start = self.consumed - self.partial.len();

        let valid_up_to = match simdutf8::compat::from_utf8(&self.partial) {
            Ok(text) => {
                self.pending_chars += text.chars().count();
                self.pending.push_str(text);
                self.partial.clear();
                return Ok(());
            }
            // A sequence cut off by the buffer boundary completes on the next fill
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(err) => {
                return Err(Error::Utf8 {
                    byte: start + err.valid_up_to(),
                    message: err.to_string(),
                }
                .into());
            }
        };

        // The prefix up to `valid_up_to` is known to be valid
        let text = simdutf8::compat::from_utf8(&self.partial[..valid_up_to]).map_err(|err| {
            Error::Utf8 {
                byte: start + err.valid_up_to(),
                message: err.to_string(),
            }
        })?;

        self.pending_chars += text.chars().count();
        self.pending.push_str(text);
        self.partial.drain(..valid_up_to);

        Ok(())
    }
}
