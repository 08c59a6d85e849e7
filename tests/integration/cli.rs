//! `dynarray run` and `dynarray menu` through the real binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run the dynarray binary with colour disabled.
fn run_dynarray(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dynarray"))
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn dynarray");

    child
        .stdin
        .take()
        .expect("stdin was piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to run dynarray")
}

#[test]
fn run_prints_each_result_and_final_listing() {
    let output = run_dynarray(
        &["run", "push:10", "push:20", "push:30", "get:1", "len", "pop"],
        "",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("pushed 30"), "{}", stdout);
    assert!(stdout.contains("[1] = 20"), "{}", stdout);
    assert!(stdout.contains("len = 3"), "{}", stdout);
    assert!(stdout.contains("popped 30"), "{}", stdout);
    assert!(stdout.contains("Element 2 - 20"), "{}", stdout);
    assert!(stdout.contains("Length: 2  Capacity: 4"), "{}", stdout);
}

#[test]
fn run_announces_growth() {
    let output = run_dynarray(
        &["run", "push:1", "push:2", "push:3", "push:4", "push:5"],
        "",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Growing array... 4 → 8"), "{}", stdout);
}

#[test]
fn run_json_stdout_is_only_the_snapshot() {
    let output = run_dynarray(&["run", "push:7", "push:-2", "--json"], "");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("{}: {}", e, stdout));

    assert_eq!(snapshot["len"], 2);
    assert_eq!(snapshot["capacity"], 4);
    assert_eq!(snapshot["items"], serde_json::json!([7, -2]));

    // Step results still reach the terminal, on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pushed -2"), "{}", stderr);
}

#[test]
fn run_json_with_growth_keeps_stdout_parseable() {
    let output = run_dynarray(
        &["run", "push:1", "push:2", "push:3", "push:4", "push:5", "--json"],
        "",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("{}: {}", e, stdout));
    assert_eq!(snapshot["capacity"], 8);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Growing array... 4 → 8"));
}

#[test]
fn run_reports_failures_on_stderr() {
    let output = run_dynarray(&["run", "pop", "get:3", "push:1"], "");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ Pop: the array is empty"), "{}", stderr);
    assert!(stderr.contains("index 3 out of range for length 0"), "{}", stderr);
    assert!(!stdout.contains("❌"), "{}", stdout);
    assert!(stdout.contains("pushed 1"), "{}", stdout);
}

#[test]
fn strict_stops_at_first_failure_but_still_prints_final_state() {
    let strict = run_dynarray(&["run", "--strict", "push:5", "pop", "pop", "push:1"], "");
    assert_eq!(strict.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&strict.stdout);
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stdout.contains("popped 5"), "{}", stdout);
    assert!(!stdout.contains("pushed 1"), "{}", stdout);
    assert!(stderr.contains("the array is empty"), "{}", stderr);
    assert!(stdout.contains("The array is empty."), "{}", stdout);
    assert!(stdout.contains("Length: 0  Capacity: 4"), "{}", stdout);
}

#[test]
fn strict_and_json_together() {
    let output = run_dynarray(&["run", "--strict", "--json", "push:9", "pop", "pop", "push:1"], "");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("{}: {}", e, stdout));
    assert_eq!(snapshot["len"], 0);
    assert_eq!(snapshot["capacity"], 4);
    assert_eq!(snapshot["items"], serde_json::json!([]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("the array is empty"), "{}", stderr);
    assert!(!stderr.contains("pushed 1"), "{}", stderr);
}

#[test]
fn run_rejects_malformed_operations_before_running() {
    let output = run_dynarray(&["run", "push:1", "push:one"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("push:one"), "{}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("pushed 1"));
}

#[test]
fn menu_is_the_default_command() {
    let output = run_dynarray(&[], "1\n42\n3\n6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Add to the array"), "{}", stdout);
    assert!(stdout.contains("Element 1 - 42"), "{}", stdout);
    assert!(stdout.contains("Thank you..."), "{}", stdout);
}

#[test]
fn menu_writes_failures_to_stderr() {
    let output = run_dynarray(&["menu"], "2\n7\n6\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌ the array is empty"), "{}", stderr);
    assert!(stderr.contains("Invalid choice, try again..."), "{}", stderr);
    assert!(!stdout.contains("❌"), "{}", stdout);
}

#[test]
fn menu_exits_cleanly_on_end_of_input() {
    let output = run_dynarray(&["menu"], "1\n5\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Thank you..."));
}
