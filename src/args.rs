use clap::Parser;
use clip_chunks::{
    ClipChunksError, Decoration, Format, Limits, Options, options::limits::parse_delay,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// File path to use as input rather than stdin ("-").
    #[arg(default_value = "-", value_name = "PATH")]
    pub(crate) input: PathBuf,

    /// Characters per chunk, before decoration [default: limit minus decoration]
    #[arg(short = 's', long, value_name = "CHARS")]
    pub(crate) chunk_size: Option<usize>,

    /// Message size limit each decorated chunk must fit [default: 2000]
    #[arg(short, long, value_name = "CHARS")]
    pub(crate) limit: Option<usize>,

    /// Seconds to pause after each chunk [default: 3]
    #[arg(short, long, value_name = "SECONDS", value_parser = parse_delay)]
    pub(crate) delay: Option<Duration>,

    /// Text before each chunk (escapes like \n are allowed).
    #[arg(short, long, default_value = Decoration::DEFAULT_PREFIX, value_name = "TEXT")]
    pub(crate) prefix: String,

    /// Text after each chunk (escapes like \n are allowed).
    #[arg(short = 'x', long, default_value = Decoration::DEFAULT_SUFFIX, value_name = "TEXT")]
    pub(crate) suffix: String,

    /// Write chunks to stdout rather than the clipboard.
    #[arg(short = 'P', long)]
    pub(crate) print: bool,

    /// Write chunks to a file rather than the clipboard.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Suppress per-chunk progress.
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Print verbose details.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,

    /// Verbose output format.
    #[arg(short = 'f', long, default_value_t, value_enum, value_name = "FORMAT")]
    pub(crate) format: Format,
}

impl Args {
    /// Builds `Options`, preferring flags over environment variables over defaults.
    pub(crate) fn options(&self) -> Result<Options, ClipChunksError> {
        let env = Limits::from_env();
        // A chunk size from the environment must not outrank an explicit `--limit`
        let chunk_size = self
            .chunk_size
            .or_else(|| self.limit.is_none().then_some(env.chunk_size).flatten());
        let limits = Limits::new(
            self.limit.unwrap_or(env.message_limit),
            chunk_size,
            self.delay.unwrap_or(env.delay),
        );
        let decoration = Decoration::unescaped(&self.prefix, &self.suffix)?;

        Ok(Options::new(limits, decoration, self.format))
    }

    /// Whether chunks go to a stream rather than the clipboard.
    pub(crate) const fn writes_stream(&self) -> bool {
        self.print || self.output.is_some()
    }
}
