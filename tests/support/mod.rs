//! Test support utilities for kmsenv integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with a cleared environment and `.current_dir()`
/// set to the temp dir, so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory holding the env file
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with `app.env` initialized.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd(TEST_KEY_ID, ENV_FILE);
        assert!(
            output.status.success(),
            "Failed to initialize env file: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with `app.env` initialized and entries added.
    pub fn with_entries(entries: &[&str]) -> Self {
        let t = Self::init();
        let output = t.add(entries);
        assert!(
            output.status.success(),
            "Failed to add entries {:?}: {}",
            entries,
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Absolute path of a file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Contents of the default env file.
    pub fn env_file(&self) -> String {
        std::fs::read_to_string(self.path(ENV_FILE)).expect("failed to read env file")
    }
}
