//! Line-aligned chunking of a character stream.
//!
//! Each chunk holds at most `chunk_size` characters. When a chunk ends partway
//! through a line, that partial line is carried over and repeated at the head
//! of the next chunk, so a line that fits in a chunk is never split across two.
//!
//! A chunk without any newline carries nothing: its line is longer than a
//! chunk and is split at `chunk_size` characters. The carry is therefore
//! always shorter than `chunk_size`, every chunk reads at least one new
//! character, and the sequence ends once the source is exhausted.

use std::{io::BufRead, iter::FusedIterator, mem};

use anyhow::Result;
use memchr::memrchr;

use crate::{error::Error, options::decoration::Decoration, reader::CharReader};

/// A bounded run of source text, ready for hand-off.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Undecorated text, carry-over included.
    text: String,

    /// Byte length of the leading carry-over repeated from the previous chunk.
    overlap: usize,

    /// Character count of `text`.
    chars: usize,

    /// 1-based position in the sequence.
    index: usize,
}

impl Chunk {
    /// Gets the undecorated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the leading carry-over repeated from the previous chunk.
    pub fn carried(&self) -> &str {
        &self.text[..self.overlap]
    }

    /// Gets the text read fresh from the source for this chunk.
    pub fn fresh(&self) -> &str {
        &self.text[self.overlap..]
    }

    /// Gets the character count of the undecorated text.
    pub const fn chars(&self) -> usize {
        self.chars
    }

    /// Gets the 1-based position of this chunk.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Wraps the text in the given decoration.
    pub fn decorate(&self, decoration: &Decoration) -> String {
        decoration.apply(&self.text)
    }

    /// Consumes the chunk, returning its undecorated text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// A lazy, finite iterator of chunks over a buffered source.
///
/// # Examples
///
/// ```
/// use clip_chunks::{Chunks, Input};
/// # fn example() -> anyhow::Result<()> {
/// let chunks = Chunks::new(Input::from_bytes("a\nb\nc\n"), 4)?
///     .map(|chunk| chunk.map(clip_chunks::Chunk::into_text))
///     .collect::<anyhow::Result<Vec<_>>>()?;
///
/// assert_eq!(chunks, ["a\nb\n", "c\n"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Chunks<R> {
    reader: CharReader<R>,
    chunk_size: usize,
    carry: String,
    carry_chars: usize,
    emitted: usize,
    done: bool,
}

impl<R: BufRead> Chunks<R> {
    /// Creates a chunk iterator over `source` with at most `chunk_size` characters per chunk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `chunk_size` is zero.
    pub fn new(source: R, chunk_size: usize) -> Result<Self, Error> {
        if chunk_size == 0 {
            return Err(Error::Config("chunk size must be at least 1".to_string()));
        }

        Ok(Self {
            reader: CharReader::new(source),
            chunk_size,
            carry: String::new(),
            carry_chars: 0,
            emitted: 0,
            done: false,
        })
    }

    /// Gets the maximum characters per chunk.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Reads the next chunk, or `None` once the source is exhausted.
    fn next_chunk(&mut self) -> Result<Option<Chunk>> {
        let fresh = self.reader.read_chars(self.chunk_size - self.carry_chars)?;

        // The pending carry already went out as the tail of the previous chunk
        if fresh.is_empty() {
            return Ok(None);
        }

        let overlap = self.carry.len();
        let chars = self.carry_chars + fresh.chars().count();
        let mut text = mem::take(&mut self.carry);
        text.push_str(&fresh);

        self.carry = trailing_line(&text).to_string();
        self.carry_chars = self.carry.chars().count();
        self.emitted += 1;

        Ok(Some(Chunk {
            text,
            overlap,
            chars,
            index: self.emitted,
        }))
    }
}

impl<R: BufRead> Iterator for Chunks<R> {
    type Item = Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Chunks<R> {}

/// Text after the last newline, or nothing when there is no newline.
fn trailing_line(text: &str) -> &str {
    memrchr(b'\n', text.as_bytes()).map_or("", |newline| &text[newline + 1..])
}
