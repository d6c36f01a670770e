//! Isolated environment for running the `growth` binary.
//!
//! Every run gets its own working directory and HOME so neither a
//! developer's `growth.toml` nor their user config leaks into results.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout);
        })
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn project_path(&self) -> &Path {
        self.project_root.path()
    }

    /// Write `growth.toml` into the working directory
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        let path = self.project_path().join("growth.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the per-user config file
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.path().join(".config/growth");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_growth"));
        cmd.current_dir(self.project_path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("GROWTH_CURRENCY")
            .env_remove("GROWTH_REDUCED_MOTION")
            .env_remove("GROWTH_COLOR");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in envs {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("failed to run growth");
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
