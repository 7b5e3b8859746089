use std::process::{Command, Output};

use tierlist_probe::logger::DEBUG_ENV;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_decode-tierlist"))
        .args(args)
        .env(DEBUG_ENV, "debug")
        .output()
        .unwrap()
}

#[test]
fn logs_go_to_stderr_and_report_to_stdout() {
    let output = run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "{stdout}");
    assert!(lines[0].starts_with("Decoded data: "));
    assert_eq!(lines[3], "Part 0 (name): \"Yum\"");
    assert!(!stdout.contains("[DEBUG]"));

    assert!(stderr.contains("[DEBUG]"), "{stderr}");
    assert!(stderr.contains("Enabled log DEBUG."), "{stderr}");
}

#[test]
fn outer_failure_still_exits_zero() {
    let output = run(&["@@@@"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Error decoding: "));
}

#[test]
fn json_flag_emits_json() {
    let output = run(&["--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "decoded");
    assert_eq!(value["segments"][0]["name"], "Yum");
}

#[test]
fn usage_errors_exit_one() {
    for args in [&["-v"][..], &["--bogus"], &["WXVt", "YQ"], &["--help"]] {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(output.stdout.is_empty(), "args: {args:?}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: "));
    }
}
