//! # buildgen Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the command handlers behind both front ends of
//! buildgen: the `clap` subcommands parsed in `main.rs` and the interactive
//! numbered menu in `menu`. Both operate on a `Session`, which carries the
//! loaded configuration and the project directory being worked on.
//!
//! ## Command Groups
//!
//! - `summary`: list the source and header files discovery finds
//! - `generate`: Makefile, CMakeLists.txt and advanced Java Makefile generation
//! - `new`: scaffold a new project directory
//! - `config`: show, locate or reset the persisted configuration
//! - `menu`: the interactive front end routing to all of the above
//!
use crate::core::config::{load_or_init, Config};
use crate::core::error::Result;
use crate::core::model::Language;
use crate::generate::validate_identifier;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Show, locate or reset the persisted configuration.
pub mod config;
/// Build file generation for all three artifacts.
pub mod generate;
/// Interactive main menu and configuration submenu.
pub mod menu;
/// Project scaffolding.
pub mod new;
/// Source file listing.
pub mod summary;

/// State shared by every command for one run of the program.
#[derive(Debug, Clone)]
pub struct Session {
    /// Preferences loaded at startup; the menu edits and saves them.
    pub config: Config,
    /// Where `config` is persisted.
    pub config_path: PathBuf,
    /// Directory discovery runs in and build files are written to.
    pub project_dir: PathBuf,
}

impl Session {
    /// Loads (or creates) the configuration and binds the project directory.
    pub fn open(config_path: &Path, project_dir: &Path) -> Result<Self> {
        let config = load_or_init(config_path)?;
        let session = Session {
            config,
            config_path: config_path.to_path_buf(),
            project_dir: project_dir.to_path_buf(),
        };
        debug!("Session opened: {:?}", session);
        Ok(session)
    }

    /// Target name offered when the user gives none: the project directory's
    /// name, with anything outside `[A-Za-z0-9_]` replaced by `_`.
    ///
    /// A name `language` would still reject (`2048` for a Java class, `obj`
    /// for a Makefile binary) gets a leading `_`.
    pub fn default_target_name(&self, language: Language) -> String {
        // Canonicalize so `-C .` yields the real directory name
        let resolved = std::fs::canonicalize(&self.project_dir)
            .unwrap_or_else(|_| self.project_dir.clone());
        let raw = resolved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = sanitize_identifier(&raw);
        if validate_identifier(&name, language).is_ok() {
            name
        } else {
            format!("_{}", name)
        }
    }
}

/// Maps `raw` onto the identifier alphabet. Empty input becomes `main`.
pub fn sanitize_identifier(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "main".to_string()
    } else {
        cleaned
    }
}
