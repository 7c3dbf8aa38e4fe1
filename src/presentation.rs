// src/presentation.rs
use std::{path::Path, process::ExitCode, time::Duration};

use filter_log_ports::FilterSummary;
use filter_log_shared_kernel::{ErrorKind, FilterLogError};

pub fn banner(input: &Path, output: &Path) -> String {
    format!("Filtering log from {} to {}", input.display(), output.display())
}

pub fn completion(input: &Path, output: &Path, summary: &FilterSummary, elapsed: Duration) -> String {
    format!(
        "Finished filtering log from {} to {}. {} lines. Takes {:.6} seconds.",
        input.display(),
        output.display(),
        summary.lines,
        elapsed.as_secs_f64()
    )
}

/// 終了コード: 1 = 使い方, 2 = オープン失敗, 3 = 処理中の I/O 失敗
pub fn exit_code(err: &FilterLogError) -> ExitCode {
    match err.kind() {
        ErrorKind::Usage => ExitCode::from(1),
        ErrorKind::Open => ExitCode::from(2),
        ErrorKind::Stream => ExitCode::from(3),
    }
}
