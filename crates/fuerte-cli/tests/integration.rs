//! Integration tests for the fuerte CLI binary.
//!
//! Tests cover the binary invocation of every subcommand, including a
//! piped-stdin session against `fuerte serve`.

use std::io::Write;
use std::process::{Command, Stdio};

/// Helper to get the path to the `fuerte` binary built by cargo.
fn fuerte_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fuerte"))
}

// ---------------------------------------------------------------------------
// `fuerte curve`
// ---------------------------------------------------------------------------

#[test]
fn cli_curve_sweep_hits_the_breakpoints() {
    let output = fuerte_bin()
        .arg("curve")
        .output()
        .expect("failed to run fuerte curve");
    assert!(output.status.success(), "fuerte curve failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("multiplier"), "should print a header");

    // Breakpoint rows of the canonical curve.
    for expected in ["6.00", "9.50", "12.00", "6000", "9500", "12000"] {
        assert!(
            stdout.contains(expected),
            "sweep should contain '{expected}':\n{stdout}"
        );
    }
}

#[test]
fn cli_curve_single_multiplier() {
    let output = fuerte_bin()
        .args(["curve", "--multiplier", "3.5"])
        .output()
        .expect("failed to run fuerte curve");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10.75"), "3.5x maps to 10.75 dB:\n{stdout}");
    assert!(stdout.contains("10750"), "3.5x maps to 10750 mB:\n{stdout}");
}

#[test]
fn cli_curve_rejects_non_positive_step() {
    let output = fuerte_bin()
        .args(["curve", "--step", "0"])
        .output()
        .expect("failed to run fuerte curve");
    assert!(!output.status.success(), "step 0 must be rejected");
}

// ---------------------------------------------------------------------------
// `fuerte run`
// ---------------------------------------------------------------------------

#[test]
fn cli_run_default_lifecycle() {
    let output = fuerte_bin()
        .arg("run")
        .output()
        .expect("failed to run fuerte run");
    assert!(output.status.success(), "fuerte run failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("boost effect active"), "got:\n{stdout}");
    assert!(stdout.contains("0.00 dB"), "1.0x row missing:\n{stdout}");
    assert!(stdout.contains("6.00 dB"), "2.0x row missing:\n{stdout}");
    assert!(stdout.contains("10.75 dB"), "3.5x row missing:\n{stdout}");
    assert!(stdout.contains("boost effect released"), "got:\n{stdout}");
}

#[test]
fn cli_run_graph_backend() {
    let output = fuerte_bin()
        .args(["run", "--backend", "graph", "--boost", "4.0"])
        .output()
        .expect("failed to run fuerte run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("12.00 dB"), "ceiling row missing:\n{stdout}");
}

#[test]
fn cli_run_graph_rejects_non_global_session() {
    let output = fuerte_bin()
        .args(["run", "--backend", "graph", "--session", "5"])
        .output()
        .expect("failed to run fuerte run");
    assert!(
        !output.status.success(),
        "graph backend must refuse session 5"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid audio session"),
        "got:\n{stderr}"
    );
}

// ---------------------------------------------------------------------------
// `fuerte serve`
// ---------------------------------------------------------------------------

#[test]
fn cli_serve_json_session() {
    let mut child = fuerte_bin()
        .arg("serve")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn fuerte serve");

    let requests = concat!(
        "{\"method\":\"initAudioBoost\"}\n",
        "{\"method\":\"setAudioBoost\",\"args\":{\"multiplier\":2.0}}\n",
        "not json\n",
        "{\"method\":\"releaseAudioBoost\"}\n",
    );
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(requests.as_bytes())
        .expect("write requests");

    let output = child.wait_with_output().expect("fuerte serve crashed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "one response per request:\n{stdout}");
    assert_eq!(lines[0], r#"{"status":"success","value":true}"#);
    assert_eq!(lines[1], r#"{"status":"success","value":true}"#);
    assert!(
        lines[2].contains("INVALID_ARGS"),
        "malformed line must report INVALID_ARGS: {}",
        lines[2]
    );
    assert_eq!(lines[3], r#"{"status":"success","value":true}"#);
}
