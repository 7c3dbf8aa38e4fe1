// src/app.rs
use std::io::Write;

use filter_log_infra::{ConsoleProgress, FileByteSink, FileByteSource, Stopwatch};
use filter_log_ports::FilterSummary;
use filter_log_shared_kernel::{ErrorContext, InfrastructureError, Result, path::same_file};
use filter_log_usecase::FilterStream;

use crate::cli::Args;
use crate::presentation;

/// One filtering run, reporting to `out`.
///
/// Both files are opened (and validated) before the first byte is read. The
/// handles are dropped on every return path.
///
/// # Errors
///
/// `Open`-kind errors when either file cannot be acquired, `Stream`-kind
/// errors for read, write or report failures afterwards.
pub fn run<W: Write>(args: &Args, mut out: W) -> Result<FilterSummary> {
    let watch = Stopwatch::start();
    report(&mut out, &presentation::banner(&args.input, &args.output))?;

    let source = FileByteSource::open(&args.input)?;
    if same_file(&args.input, &args.output) {
        return Err(InfrastructureError::OutputIsInput { path: args.output.clone() }.into());
    }
    let sink = FileByteSink::create(&args.output)?;

    let progress = ConsoleProgress::with_writer(&args.input, &args.output, args.progress_interval, out)
        .quiet(args.quiet);
    let summary = FilterStream::new(source, sink, &progress)
        .run()
        .with_context(|| format!("filtering {}", args.input.display()))?;
    let mut out = progress.into_inner();

    let elapsed = watch.stop();
    report(
        &mut out,
        &presentation::completion(&args.input, &args.output, &summary, elapsed),
    )?;
    Ok(summary)
}

fn report<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(|source| InfrastructureError::Report { source }.into())
}
