//! # buildgen Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the persisted preferences of buildgen: which
//! architecture to target by default, which compiler flags to use per language,
//! where new projects go, which build system is preferred and whether build
//! directories are created automatically.
//!
//! ## Architecture
//!
//! The configuration lives in a single JSON file (`buildgen_config.json` in the
//! working directory unless `--config`/`BUILDGEN_CONFIG` points elsewhere):
//! - A missing file is created with defaults on first run.
//! - Unknown keys are ignored and missing keys take their default values.
//! - A file that is not valid JSON (or holds unknown enum values) is treated as
//!   absent: a warning is logged, defaults are used, and the next save writes a
//!   fresh valid file.
//!
//! ## Examples
//!
//! ```rust
//! let path = Path::new(config::DEFAULT_CONFIG_FILENAME);
//! let mut cfg = config::load_or_init(path)?;
//! cfg.default_architecture = Architecture::X32;
//! config::save_config(path, &cfg)?;
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{BuildgenError, Result};
use crate::core::model::{Architecture, BuildSystem, Language};
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// File name used when no explicit configuration path is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "buildgen_config.json";

/// Persisted user preferences, stored as JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Architecture offered as the default when generating build files.
    pub default_architecture: Architecture,
    /// Compiler flags keyed by language name (`"C"`, `"C++"`, `"Java"`).
    pub default_compiler_flags: BTreeMap<String, String>,
    /// Directory name suggested for new projects (may start with `~`).
    pub default_project_dir: String,
    /// Build system used by `buildgen generate`.
    pub preferred_build_system: BuildSystem,
    /// Create `obj/`/`build/` after generation and missing parents of new projects.
    pub auto_create_directories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_architecture: Architecture::X64,
            default_compiler_flags: default_compiler_flags(),
            default_project_dir: default_project_dir(),
            preferred_build_system: BuildSystem::Make,
            auto_create_directories: true,
        }
    }
}

impl Config {
    /// Flags configured for `lang`, or the language default when unset.
    pub fn compiler_flags(&self, lang: Language) -> &str {
        self.default_compiler_flags
            .get(lang.config_key())
            .map(String::as_str)
            .unwrap_or_else(|| lang.default_flags())
    }

    pub fn set_compiler_flags(&mut self, lang: Language, flags: &str) {
        self.default_compiler_flags
            .insert(lang.config_key().to_string(), flags.trim().to_string());
    }

    /// Adds the default flags of every language missing from the flags map.
    fn fill_missing_flags(&mut self) {
        for lang in Language::ALL {
            self.default_compiler_flags
                .entry(lang.config_key().to_string())
                .or_insert_with(|| lang.default_flags().to_string());
        }
    }
}

fn default_compiler_flags() -> BTreeMap<String, String> {
    Language::ALL
        .iter()
        .map(|lang| (lang.config_key().to_string(), lang.default_flags().to_string()))
        .collect()
}

fn default_project_dir() -> String {
    "new_project".to_string()
}

/// Loads the configuration at `path`, creating it with defaults when missing.
///
/// A corrupt file never fails the load; only an unreadable one does.
pub fn load_or_init(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!(
            "No configuration found at {}, creating defaults.",
            path.display()
        );
        let config = Config::default();
        if let Err(e) = save_config(path, &config) {
            warn!("Could not write default configuration: {:#}", e);
        }
        return Ok(config);
    }

    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    match parse_config(&content) {
        Ok(config) => {
            debug!("Loaded configuration: {:?}", config);
            Ok(config)
        }
        Err(e) => {
            warn!(
                "Invalid configuration file {}: {:#}. Using defaults.",
                path.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parses configuration JSON, filling in anything the document leaves out.
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config =
        serde_json::from_str(content).context("Failed to parse configuration JSON")?;
    config.fill_missing_flags();
    Ok(config)
}

/// Validates and writes `config` to `path` as pretty-printed JSON.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    validate_config(config).context("Configuration validation failed")?;
    let mut json = serde_json::to_string_pretty(config)
        .map_err(|e| anyhow!(BuildgenError::Config(e.to_string())))?;
    json.push('\n');
    io::write_string_to_file(path, &json)
        .with_context(|| format!("Failed to save configuration to {}", path.display()))?;
    info!("Configuration saved to {}", path.display());
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.default_project_dir.trim().is_empty() {
        return Err(anyhow!(BuildgenError::Config(
            "default_project_dir cannot be empty.".to_string()
        )));
    }
    for key in config.default_compiler_flags.keys() {
        if key.parse::<Language>().is_err() {
            warn!("Ignoring compiler flags for unknown language '{}'.", key);
        }
    }
    Ok(())
}
