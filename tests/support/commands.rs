//! Command helper methods for Test.

use super::{Test, ENV_FILE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a kmsenv command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - An empty environment apart from `HOME` and `NO_COLOR`
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("kmsenv").expect("failed to find kmsenv binary");
        cmd.env_clear();
        cmd.env("HOME", self.dir.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `kmsenv init` command.
    pub fn init_cmd(&self, key_id: &str, file: &str) -> Output {
        self.cmd()
            .args(["init", key_id, file])
            .output()
            .expect("failed to run kmsenv init")
    }

    /// Shortcut for `kmsenv add` against the default env file.
    pub fn add(&self, entries: &[&str]) -> Output {
        self.cmd()
            .arg("add")
            .arg(ENV_FILE)
            .args(entries)
            .output()
            .expect("failed to run kmsenv add")
    }

    /// Shortcut for `kmsenv show` against the default env file.
    pub fn show(&self) -> Output {
        self.cmd()
            .args(["show", ENV_FILE])
            .output()
            .expect("failed to run kmsenv show")
    }

    /// Shortcut for `kmsenv show --json` against the default env file.
    pub fn show_json(&self) -> Output {
        self.cmd()
            .args(["show", ENV_FILE, "--json"])
            .output()
            .expect("failed to run kmsenv show --json")
    }

    /// Run `kmsenv decrypt` with the given variables in its environment.
    pub fn decrypt(&self, vars: &[(&str, &str)]) -> Output {
        self.cmd()
            .arg("decrypt")
            .envs(vars.iter().copied())
            .output()
            .expect("failed to run kmsenv decrypt")
    }

    /// Encrypted (`SECURE:...`) value of an entry in the default env file.
    pub fn secure_value(&self, name: &str) -> String {
        let prefix = format!("{}=", name);
        self.env_file()
            .lines()
            .find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
            .unwrap_or_else(|| panic!("{} not found in env file", name))
    }
}
