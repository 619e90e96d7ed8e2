//! # buildgen CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Every
//! command built here runs inside a temporary workspace: the working directory
//! is the workspace and `BUILDGEN_CONFIG` points at a configuration file inside
//! it, so tests never read or write the developer's real configuration.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the configuration file inside a test workspace.
pub const CONFIG_FILE: &str = "buildgen_config.json";

/// Command for the compiled `buildgen` binary.
pub fn buildgen_cmd() -> Command {
    Command::cargo_bin("buildgen").expect("Failed to find buildgen binary for testing")
}

/// A temporary directory with a `project/` subdirectory to generate into.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp workspace");
        fs::create_dir(dir.path().join("project")).expect("Failed to create project dir");
        Workspace { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn project(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(CONFIG_FILE)
    }

    /// Writes `content` to `relative` inside the project directory.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Reads `relative` from the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project().join(relative)).expect("Failed to read generated file")
    }

    /// `buildgen` running in the workspace root against `project/`.
    pub fn cmd(&self) -> Command {
        let mut cmd = buildgen_cmd();
        cmd.current_dir(self.root())
            .env("BUILDGEN_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .args(["-C", "project"]);
        cmd
    }
}
