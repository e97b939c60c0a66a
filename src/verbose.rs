//! Verbose diagnostics for a chunked hand-off.

use anyhow::{Context, Result};
use clip_chunks::{ClipChunksError, Format, Options, Output, Summary};
use serde::Serialize;

/// Writes settings before the hand-off and totals after it.
#[derive(Debug)]
pub(crate) struct Verbose {
    output: Output,
    format: Format,
}

/// Settings that can be serialized to JSON.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Settings<'a> {
    pub(crate) source: &'a str,
    pub(crate) sink: &'a str,
    pub(crate) chunk_size: usize,
    pub(crate) limit: usize,
    pub(crate) delay: f64,
    pub(crate) prefix: &'a str,
    pub(crate) suffix: &'a str,
}

impl Settings<'_> {
    /// Get all fields as name-value pairs.
    fn field_pairs(&self) -> [(&'static str, String); 7] {
        [
            ("source", self.source.to_string()),
            ("sink", self.sink.to_string()),
            ("chunk-size", self.chunk_size.to_string()),
            ("limit", self.limit.to_string()),
            ("delay", format!("{}s", self.delay)),
            ("prefix", format!("{:?}", self.prefix)),
            ("suffix", format!("{:?}", self.suffix)),
        ]
    }
}

impl Verbose {
    /// Verbose logger writing to stderr in the format chosen by `options`.
    pub(crate) fn new(options: &Options) -> Self {
        Self {
            output: Output::stderr(),
            format: options.format(),
        }
    }

    /// Writes the settings in effect before any chunk is handed off.
    pub(crate) fn write_settings(&mut self, settings: &Settings<'_>) -> Result<()> {
        match self.format {
            Format::Json => self.write_json(settings),
            Format::Text => self.write_text(&settings.field_pairs()),
        }
    }

    /// Writes totals once the source is exhausted.
    pub(crate) fn write_summary(&mut self, summary: &Summary) -> Result<()> {
        match self.format {
            Format::Json => self.write_json(summary),
            Format::Text => self.write_text(&[
                ("chunks", summary.chunks.to_string()),
                ("chars", summary.chars.to_string()),
            ]),
        }
    }

    /// Write one JSON object per line.
    fn write_json(&mut self, data: &impl Serialize) -> Result<()> {
        let json = serde_json::to_string(data).map_err(ClipChunksError::JsonSerialization)?;

        self.output
            .write_line(&format!("{json}\n"))
            .context("failed to write JSON output")
    }

    /// Write each field as a `key value` line.
    fn write_text(&mut self, pairs: &[(&str, String)]) -> Result<()> {
        pairs.iter().try_for_each(|(field_name, value)| {
            self.output.write_line(&format!("{field_name} {value}\n"))
        })
    }
}
