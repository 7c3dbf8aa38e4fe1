// crates/infra/src/reporting.rs
//! 進捗表示
//!
//! Human-readable progress lines written to a console stream.

use std::{
    cell::RefCell,
    io::Write,
    path::{Path, PathBuf},
};

use filter_log_ports::{FilterSummary, ProgressSink};
use filter_log_shared_kernel::{InfraResult, InfrastructureError, LineCount, ProgressInterval};

/// Prints `Filtering log from <in> to <out>. <n> lines` every `interval` lines.
pub struct ConsoleProgress<W: Write> {
    input: PathBuf,
    output: PathBuf,
    interval: ProgressInterval,
    quiet: bool,
    out: RefCell<W>,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_writer(input: &Path, output: &Path, interval: ProgressInterval, out: W) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            interval,
            quiet: false,
            out: RefCell::new(out),
        }
    }

    /// Suppress interval lines. Completion is still logged.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn on_line(&self, lines: LineCount) -> InfraResult<()> {
        if self.quiet || !self.interval.is_due(lines) {
            return Ok(());
        }
        let mut out = self.out.borrow_mut();
        writeln!(
            out,
            "Filtering log from {} to {}. {} lines",
            self.input.display(),
            self.output.display(),
            lines
        )
        .and_then(|()| out.flush())
        .map_err(|source| InfrastructureError::Report { source })
    }

    fn on_complete(&self, summary: &FilterSummary) -> InfraResult<()> {
        log::info!(
            "{} -> {}: kept {} of {} lines, {} of {} bytes",
            self.input.display(),
            self.output.display(),
            summary.accepted_lines,
            summary.lines,
            summary.bytes_written,
            summary.bytes_read
        );
        Ok(())
    }
}
