//! Copy a text source to the clipboard in line-aligned chunks, one paste at a time.
//!
//! `clip-chunks` reads text incrementally, splits it into chunks of at most
//! `chunk_size` characters that prefer to end at a newline, wraps each chunk in a
//! fixed decoration and hands it to a [`Sink`] (normally the system [`Clipboard`]),
//! pausing after every hand-off so an operator can paste it somewhere with a
//! message size limit.
//!
//! When a chunk ends partway through a line, that partial line is repeated at the
//! head of the next chunk. Lines longer than a whole chunk are split.
//!
//! ## Module structure
//!
//! - `chunker.rs`: The chunking algorithm as a lazy [`Chunks`] iterator
//! - `dispatcher.rs`: Hand-off loop driving chunks into a sink
//! - `error.rs`: Structured error types
//! - `exit_code.rs`: Exit code definitions and handling
//! - `input.rs`: File, stdin and in-memory sources
//! - `options/`: Configuration options
//!   - `options/decoration.rs`: Prefix and suffix around each chunk
//!   - `options/limits.rs`: Message limit, chunk size and delay
//!   - `options/serialization.rs`: Verbose output format
//! - `output.rs`: Output to stdout, stderr or files
//! - `pause.rs`: Pacing between hand-offs
//! - `reader.rs`: Incremental UTF-8 character reader
//! - `sink.rs`: Clipboard and stream sinks
//!
//! # Examples
//!
//! ```
//! use clip_chunks::{Chunks, Dispatcher, Input, Options, Sink};
//! use std::time::Duration;
//! use anyhow::Result;
//!
//! #[derive(Default)]
//! struct Recorder(Vec<String>);
//!
//! impl Sink for Recorder {
//!     fn copy(&mut self, text: &str) -> Result<()> {
//!         self.0.push(text.to_string());
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let options = Options::default().with_chunk_size(4);
//! let chunks = Chunks::new(Input::from_bytes("a\nb\nc\n"), options.chunk_size()?)?;
//!
//! let mut recorder = Recorder::default();
//! let mut pauses = Vec::new();
//! let summary = Dispatcher::new(&mut recorder, |delay: Duration| pauses.push(delay), &options)
//!     .run(chunks, |_| Ok(()))?;
//!
//! assert_eq!(summary.chunks, 2);
//! assert_eq!(recorder.0, ["```ansi a\nb\n```", "```ansi c\n```"]);
//! assert_eq!(pauses, [Duration::from_secs(3); 2]);
//! # Ok(())
//! # }
//! ```

pub mod chunker;
pub mod dispatcher;
pub mod error;
pub mod exit_code;
pub mod input;
pub mod options;
pub mod output;
pub mod pause;
pub mod reader;
pub mod sink;

pub use chunker::{Chunk, Chunks};
pub use dispatcher::{Dispatcher, Summary};
pub use error::Error as ClipChunksError;
pub use input::Input;
pub use options::{Options, decoration::Decoration, limits::Limits, serialization::Format};
pub use output::Output;
pub use pause::{Pause, Sleep};
pub use reader::CharReader;
pub use sink::{Clipboard, Sink};
