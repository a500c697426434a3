//! Tests for usage and error reporting that need no KMS access.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_no_command_prints_usage_and_succeeds() {
    let t = Test::new();

    t.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("rotate").assert().failure();
}

#[test]
fn test_add_requires_entries() {
    let t = Test::init();

    t.cmd()
        .args(["add", ENV_FILE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=VALUE"));
}

#[test]
fn test_add_malformed_token_fails_before_kms() {
    let t = Test::init();
    let before = t.env_file();

    let output = t.add(&["GOOD=1", "BROKEN"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed entry 'BROKEN'");

    assert_eq!(t.env_file(), before);
}

#[test]
fn test_add_empty_name_fails() {
    let t = Test::init();

    let output = t.add(&["=value"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "name cannot be empty");
}

#[test]
fn test_decrypt_without_encrypted_vars_prints_nothing() {
    let t = Test::new();

    let output = t.decrypt(&[("PATH", "/usr/bin"), ("GREETING", "hello")]);
    assert_success(&output);
    assert_no_payload(&output);
}

#[test]
fn test_completions_generate_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kmsenv"));
}

#[test]
fn test_errors_use_cross_mark() {
    let t = Test::new();

    let output = t.init_cmd("  ", ENV_FILE);
    assert_failure(&output);
    assert_stderr_contains(&output, "✗");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.init_cmd("key-123", ENV_FILE);
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--verbose", "init", "key-123", ENV_FILE])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_log_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("KMSENV_LOG", "kmsenv=info")
        .args(["init", "key-123", ENV_FILE])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "INFO");
}
