//! `clip-chunks` copies a text file to the clipboard one chunk at a time.

pub(crate) mod args;
pub(crate) mod verbose;

use std::process;

use anyhow::Result;
use args::Args;
use clap::Parser;
use clip_chunks::{
    Chunks, Clipboard, Dispatcher, Input, Output, Sink, Sleep, exit_code::ExitCode,
};
use verbose::{Settings, Verbose};

fn main() -> process::ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // `--help` and `--version` also arrive here, with a success code
        Err(err) => {
            let code = ExitCode::from(&err);
            if err.print().is_err() {
                return ExitCode::Io.into();
            }
            return code.into();
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from_error(&err).into()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.options()?;
    let chunk_size = options.chunk_size()?;
    let input = Input::open(&args.input)?;
    let source = input.source();

    let (sink, sink_name): (Box<dyn Sink>, String) = if args.writes_stream() {
        let name = match args.output.as_deref() {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "stdout".to_string(),
        };
        (Box::new(Output::new(args.output.as_deref())?), name)
    } else {
        (Box::new(Clipboard::new()?), "clipboard".to_string())
    };

    let mut verbose = args.verbose.then(|| Verbose::new(&options));
    if let Some(verbose) = verbose.as_mut() {
        verbose.write_settings(&Settings {
            source: &source,
            sink: &sink_name,
            chunk_size,
            limit: options.limits().message_limit,
            delay: options.delay().as_secs_f64(),
            prefix: options.decoration().prefix(),
            suffix: options.decoration().suffix(),
        })?;
    }

    let chunks = Chunks::new(input, chunk_size)?;
    let mut progress = Output::stderr();
    let summary = Dispatcher::new(sink, Sleep, &options).run(chunks, |chunk| {
        if args.quiet {
            return Ok(());
        }
        progress.write_line(&format!(
            "copied chunk {} ({} chars) to {sink_name}\n",
            chunk.index(),
            chunk.chars()
        ))
    })?;
    progress.flush()?;

    if let Some(verbose) = verbose.as_mut() {
        verbose.write_summary(&summary)?;
    }

    Ok(())
}
