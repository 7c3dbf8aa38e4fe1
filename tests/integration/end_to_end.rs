// tests/integration/end_to_end.rs
use std::path::Path;

use filter_log::{app, cli::Args};
use filter_log_shared_kernel::{ErrorKind, ProgressInterval};

#[path = "../common/mod.rs"]
mod common;
use common::{MIXED_LOG, MIXED_LOG_FILTERED, TempWorkspace};

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        progress_interval: ProgressInterval::default(),
        quiet: false,
        verbose: 0,
    }
}

#[test]
fn run_writes_filtered_file_and_reports() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("in.log", MIXED_LOG);
    let output = ws.out_path("out.log");
    let mut stdout = Vec::new();

    let summary = app::run(&args(&input, &output), &mut stdout).expect("run succeeds");

    assert_eq!(ws.read(&output), MIXED_LOG_FILTERED);
    assert_eq!(summary.lines.value(), 7);
    assert_eq!(summary.accepted_lines.value(), 4);
    assert_eq!(summary.bytes_read.value(), MIXED_LOG.len() as u64);
    assert_eq!(summary.bytes_written.value(), MIXED_LOG_FILTERED.len() as u64);

    let text = String::from_utf8(stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Filtering log from "));
    assert!(lines[1].starts_with("Finished filtering log from "));
}

#[test]
fn second_pass_is_a_fixed_point() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("in.log", MIXED_LOG);
    let once = ws.out_path("once.log");
    let twice = ws.out_path("twice.log");

    app::run(&args(&input, &once), std::io::sink()).unwrap();
    app::run(&args(&once, &twice), std::io::sink()).unwrap();

    assert_eq!(ws.read(&once), ws.read(&twice));
}

#[test]
fn progress_fires_twice_for_250k_lines() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("big.log", &b"> x\n".repeat(250_000));
    let output = ws.out_path("out.log");
    let mut stdout = Vec::new();

    let summary = app::run(&args(&input, &output), &mut stdout).unwrap();

    assert_eq!(summary.lines.value(), 250_000);
    let text = String::from_utf8(stdout).unwrap();
    let progress: Vec<&str> = text.lines().filter(|l| l.ends_with(" lines")).collect();
    assert_eq!(progress.len(), 2);
    assert!(progress[0].ends_with(". 100000 lines"));
    assert!(progress[1].ends_with(". 200000 lines"));
}

#[test]
fn open_failure_is_reported_before_output_exists() {
    let ws = TempWorkspace::new();
    let input = ws.out_path("missing.log");
    let output = ws.out_path("out.log");

    let err = app::run(&args(&input, &output), std::io::sink()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Open);
    assert!(!output.exists());
}
