// Console output and the fatal exit path are observed from a child process:
// the test binary re-runs one of its own tests with CHILD_ENV set.

use std::process::{Command, Output};
use std::sync::Arc;

use log_writer::{LogWriter, SharedTarget, WriterLogTarget};

const CHILD_ENV: &str = "LOG_WRITER_CHILD";

fn run_child(test_name: &str) -> Output {
    Command::new(std::env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap()
}

fn is_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

// Returns the tab separated fields of the first fatal line.
fn fatal_fields(stdout: &str) -> Vec<&str> {
    // libtest may print the test name on the same line first.
    let start = stdout
        .find("FATAL:\t")
        .unwrap_or_else(|| panic!("no fatal line in {stdout:?}"));
    let line = stdout[start..].lines().next().unwrap();
    line.split('\t').collect()
}

#[test]
fn fatal_writes_line_and_exits_with_status_one() {
    if is_child() {
        // Fatal ignores the zero state's gates.
        log_writer::fatal!("disk {} on fire", "sda");
    }

    let output = run_child("fatal_writes_line_and_exits_with_status_one");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "{stdout}");
    let fields = fatal_fields(&stdout);
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[2], "disk sda on fire");
    assert!(fields[3].contains("process.rs line:"), "{fields:?}");
}

#[test]
fn fatal_through_explicit_writer() {
    if is_child() {
        let writer = LogWriter::new();
        log_writer::fatal!(writer: writer, "queue {} corrupted", 7);
    }

    let output = run_child("fatal_through_explicit_writer");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "{stdout}");
    let fields = fatal_fields(&stdout);
    assert_eq!(fields[2], "queue 7 corrupted");
    assert!(fields[3].contains("process.rs line:"), "{fields:?}");
}

#[test]
fn console_writes_while_disabled() {
    if is_child() {
        let buffer = Arc::new(WriterLogTarget::new(Vec::new()));
        let target: SharedTarget = buffer.clone();
        log_writer::disable_and_reset();
        log_writer::set_output_target(Some(target.clone()));
        log_writer::info!("gated");
        log_writer::console!("ready on port {}", 2525);

        let writer = LogWriter::new();
        writer.enable(false, false, Some(target));
        log_writer::console!(writer: writer, "writer console {}", 1);

        assert!(buffer.lock().is_empty(), "console reached the configured target");
        return;
    }

    let output = run_child("console_writes_while_disabled");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{stdout}");
    assert!(stdout.lines().any(|line| line.ends_with("ready on port 2525")), "{stdout}");
    assert!(stdout.lines().any(|line| line.ends_with("writer console 1")), "{stdout}");
    assert!(!stdout.contains("gated"));
}
