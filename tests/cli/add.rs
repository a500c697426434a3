//! Tests for `kmsenv add` command.

use crate::support::*;

#[test]
fn test_add_writes_secure_entry() {
    let t = Test::init();

    let output = t.add(&["DB_PASS=secret"]);
    assert_success(&output);
    assert_stderr_contains(&output, "encrypted DB_PASS");

    let content = t.env_file();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], TEST_KEY_ID);
    assert!(lines[1].starts_with("DB_PASS=SECURE:"));
    assert!(!content.contains("secret"));
}

#[test]
fn test_add_multiple_keeps_token_order() {
    let t = Test::init();

    assert_success(&t.add(&["B=2", "A=1"]));
    assert_success(&t.add(&["A=3"]));

    let names: Vec<String> = t
        .env_file()
        .lines()
        .skip(1)
        .map(|l| l.split('=').next().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["B", "A"]);

    let output = t.show();
    assert_success(&output);
    assert_eq!(stdout(&output), "B=2\nA=3\n");
}

#[test]
fn test_add_same_name_twice_keeps_one_entry() {
    let t = Test::init();

    assert_success(&t.add(&["A=1"]));
    let first = t.secure_value("A");
    assert_success(&t.add(&["A=2"]));

    let count = t.env_file().lines().filter(|l| l.starts_with("A=")).count();
    assert_eq!(count, 1);
    assert_ne!(t.secure_value("A"), first);
}

#[test]
fn test_add_value_with_equals_signs() {
    let t = Test::init();

    assert_success(&t.add(&["URL=postgres://u:p@h/db?sslmode=require"]));

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "URL=postgres://u:p@h/db?sslmode=require");
}

#[test]
fn test_add_empty_value() {
    let t = Test::init();

    assert_success(&t.add(&["EMPTY="]));

    let output = t.show();
    assert_success(&output);
    assert_eq!(stdout(&output), "EMPTY=\n");
}

#[test]
fn test_add_failure_writes_nothing() {
    let t = Test::with_entries(&["KEEP=me"]);
    let before = t.env_file();

    let bad = format!("B={}", MOCK_FAIL);
    let output = t.add(&["A=1", bad.as_str(), "C=3"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "encryption failed for B");

    assert_eq!(t.env_file(), before);
}

#[test]
fn test_add_to_missing_file_suggests_init() {
    let t = Test::new();

    let output = t.add(&["A=1"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
    assert_stderr_contains(&output, "kmsenv init");
}

#[test]
fn test_add_to_uninitialized_file() {
    let t = Test::new();
    std::fs::write(t.path(ENV_FILE), "\n\n").unwrap();

    let output = t.add(&["A=1"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_add_keeps_hand_written_plain_entries() {
    let t = Test::new();
    std::fs::write(t.path(ENV_FILE), "key-123\nREGION=eu-west-1\n").unwrap();

    assert_success(&t.add(&["TOKEN=abc"]));

    let content = t.env_file();
    assert!(content.starts_with("key-123\nREGION=eu-west-1\nTOKEN=SECURE:"));
}

#[test]
fn test_add_standard_entries_roundtrip() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t.show();
    assert_success(&output);
    let expected: String = STANDARD_ENTRIES.iter().map(|e| format!("{}\n", e)).collect();
    assert_eq!(stdout(&output), expected);
}
