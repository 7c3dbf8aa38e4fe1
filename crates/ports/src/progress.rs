// crates/ports/src/progress.rs
use filter_log_shared_kernel::{ByteCount, InfraResult, LineCount};

/// Totals for one completed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub lines: LineCount,
    pub accepted_lines: LineCount,
    pub bytes_read: ByteCount,
    pub bytes_written: ByteCount,
}

pub trait ProgressSink {
    /// Called after every completed line with the running line count.
    /// Implementations decide whether anything is surfaced.
    fn on_line(&self, lines: LineCount) -> InfraResult<()>;
    fn on_complete(&self, summary: &FilterSummary) -> InfraResult<()>;
}
