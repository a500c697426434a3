//! Assertions on `kmsenv` process output.
//!
//! Payload (exports, listings, JSON) is on stdout; status lines and errors
//! are on stderr.

use std::process::Output;

/// Assert the command exited 0, showing stderr otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "kmsenv exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

/// Assert the command exited non-zero.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "kmsenv succeeded but should have failed; stdout: {}",
        stdout(output)
    );
}

/// Stdout as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Assert nothing was written to stdout, so `eval "$(kmsenv ...)"` is a no-op.
pub fn assert_no_payload(output: &Output) {
    let out = stdout(output);
    assert!(out.is_empty(), "expected empty stdout, got: {}", out);
}

/// Assert the payload contains `expected`.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(out.contains(expected), "stdout missing '{}', got: {}", expected, out);
}

/// Assert a status or error line contains `expected`.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(err.contains(expected), "stderr missing '{}', got: {}", expected, err);
}
