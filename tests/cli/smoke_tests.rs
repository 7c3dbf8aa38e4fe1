use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{MIXED_LOG, MIXED_LOG_FILTERED, TempWorkspace, generated_log};

fn filter_log() -> Command {
    Command::new(env!("CARGO_BIN_EXE_filter_log"))
}

#[test]
fn shows_help() {
    filter_log()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("filter_log"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    filter_log()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn one_argument_is_a_usage_error() {
    filter_log()
        .arg("only-input.log")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn filters_a_log_file() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("in.log", MIXED_LOG);
    let output = ws.out_path("out.log");

    filter_log()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtering log from"))
        .stdout(predicate::str::contains("Finished filtering log from"))
        .stdout(predicate::str::contains("7 lines"))
        .stdout(predicate::str::contains("seconds."));

    assert_eq!(ws.read(&output), MIXED_LOG_FILTERED);
}

#[test]
fn empty_input_gives_empty_output() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("empty.log", b"");
    let output = ws.out_path("out.log");

    filter_log()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(". 0 lines."));

    assert!(ws.read(&output).is_empty());
}

#[test]
fn progress_lines_follow_interval() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("big.log", &generated_log(25));
    let output = ws.out_path("out.log");

    let assert = filter_log()
        .args(["--progress-interval", "10"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let progress: Vec<&str> = stdout.lines().filter(|l| l.ends_with(" lines")).collect();
    assert_eq!(progress.len(), 2);
    assert!(progress[0].ends_with(". 10 lines"));
    assert!(progress[1].ends_with(". 20 lines"));
}

#[test]
fn quiet_hides_progress_lines() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("big.log", &generated_log(25));
    let output = ws.out_path("out.log");

    filter_log()
        .args(["-q", "--progress-interval", "10"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(". 10 lines").not());
}

#[test]
fn missing_input_exits_before_touching_output() {
    let ws = TempWorkspace::new();
    let input = ws.out_path("missing.log");
    let output = ws.out_path("out.log");

    filter_log()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to open input"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_exits_with_open_status() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("in.log", MIXED_LOG);
    let output = ws.out_path("no/such/dir/out.log");

    filter_log()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to create output"));
}

#[test]
fn refuses_to_overwrite_its_input() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("in.log", MIXED_LOG);

    filter_log()
        .arg(&input)
        .arg(ws.path().join(".").join("in.log"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("same file"));

    assert_eq!(fs::read(&input).unwrap(), MIXED_LOG);
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_is_a_stream_error() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("big.log", &b"> spam spam spam\n".repeat(20_000));

    filter_log()
        .arg(&input)
        .arg("/dev/full")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn refuses_hard_link_to_its_input() {
    let ws = TempWorkspace::new();
    let input = ws.write_input("in.log", MIXED_LOG);
    let linked = ws.out_path("linked.log");
    fs::hard_link(&input, &linked).unwrap();

    filter_log()
        .arg(&input)
        .arg(&linked)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("same file"));

    assert_eq!(fs::read(&input).unwrap(), MIXED_LOG);
}
