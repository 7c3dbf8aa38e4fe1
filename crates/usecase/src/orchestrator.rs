use filter_log_domain::LineClassifier;
use filter_log_ports::{ByteSink, ByteSource, FilterSummary, ProgressSink};
use filter_log_shared_kernel::InfraResult;

/// Single pass Source → Classifier → Sink.
pub struct FilterStream<'a, R, W> {
    source: R,
    sink: W,
    progress: &'a dyn ProgressSink,
}

impl<'a, R, W> FilterStream<'a, R, W>
where
    R: ByteSource,
    W: ByteSink,
{
    pub fn new(source: R, sink: W, progress: &'a dyn ProgressSink) -> Self {
        Self { source, sink, progress }
    }

    /// Consume the source to exhaustion.
    ///
    /// The sink is flushed once the last byte is written. Any read, write or
    /// report failure aborts immediately and is returned as-is; the sink is not
    /// flushed in that case.
    pub fn run(mut self) -> InfraResult<FilterSummary> {
        let mut classifier = LineClassifier::new();
        let mut summary = FilterSummary::default();

        while let Some(byte) = self.source.next_byte()? {
            summary.bytes_read += 1;
            let emission = classifier.feed(byte);
            self.sink.write_all(emission.as_bytes())?;
            summary.bytes_written += emission.len() as u64;
            if emission.line_completed() {
                self.progress.on_line(classifier.lines())?;
            }
        }
        self.sink.finish()?;

        summary.lines = classifier.lines();
        summary.accepted_lines = classifier.accepted_lines();
        log::debug!(
            "filtered {} bytes into {} ({} of {} lines kept)",
            summary.bytes_read,
            summary.bytes_written,
            summary.accepted_lines,
            summary.lines
        );
        self.progress.on_complete(&summary)?;
        Ok(summary)
    }
}
