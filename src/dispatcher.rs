//! Hands chunks to a sink one at a time, pausing after each.

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::{
    chunker::Chunk, options::Options, options::decoration::Decoration, pause::Pause, sink::Sink,
};

/// Totals for a completed dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Summary {
    /// Chunks handed off.
    pub chunks: usize,

    /// Undecorated characters handed off, carry-over included.
    pub chars: usize,
}

/// Decorates chunks, copies them to a sink and pauses after each hand-off.
///
/// The pause follows every hand-off, the last included, so the final chunk
/// stays available for the full delay.
#[derive(Debug)]
pub struct Dispatcher<S, P> {
    sink: S,
    pause: P,
    delay: Duration,
    decoration: Decoration,
}

impl<S: Sink, P: Pause> Dispatcher<S, P> {
    /// Creates a dispatcher using the delay and decoration from `options`.
    pub fn new(sink: S, pause: P, options: &Options) -> Self {
        Self {
            sink,
            pause,
            delay: options.delay(),
            decoration: options.decoration().clone(),
        }
    }

    /// Hands off every chunk in order.
    ///
    /// `observe` runs after each copy and before the pause that follows it.
    ///
    /// # Errors
    ///
    /// Stops at the first error from the chunks, the sink or `observe`.
    pub fn run<I>(
        &mut self,
        chunks: I,
        mut observe: impl FnMut(&Chunk) -> Result<()>,
    ) -> Result<Summary>
    where
        I: IntoIterator<Item = Result<Chunk>>,
    {
        let mut summary = Summary::default();

        for chunk in chunks {
            let chunk = chunk?;
            self.sink.copy(&chunk.decorate(&self.decoration))?;

            summary.chunks += 1;
            summary.chars += chunk.chars();

            observe(&chunk)?;
            self.pause.pause(self.delay);
        }

        Ok(summary)
    }

    /// Consumes the dispatcher, returning its sink and pause.
    pub fn into_parts(self) -> (S, P) {
        (self.sink, self.pause)
    }
}
