//! # buildgen Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach the offending path to every
//! error and log what was touched. Everything buildgen writes (build files,
//! scaffolded sources, the configuration file) goes through here.
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path is a file.
//! - **`read_file_to_string`**: `fs::read_to_string` with context.
//! - **`write_string_to_file`**: Creates the parent directory, then writes,
//!   replacing any existing file without diffing.
//!
use crate::core::error::{BuildgenError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Creates `path` and any missing parents, like `mkdir -p`.
///
/// Fails with `BuildgenError::FileSystem` when something other than a
/// directory already sits at `path` (a stray file named `obj`, say).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        debug!("Directory present: {}", path.display());
        return Ok(());
    }
    if path.exists() {
        anyhow::bail!(BuildgenError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Could not create directory {}", path.display()))?;
    info!("Created {}", path.display());
    Ok(())
}

/// Reads a whole text file, naming it in the error.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Directory that has to exist before `path` can be written.
///
/// `None` for bare file names such as `Makefile`, whose parent is the empty
/// path (the working directory).
fn containing_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Replaces the contents of `path` with `content`, creating its directory
/// first when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = containing_dir(path) {
        ensure_dir_exists(dir)?;
    }
    fs::write(path, content).with_context(|| format!("Could not write {}", path.display()))?;
    info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
