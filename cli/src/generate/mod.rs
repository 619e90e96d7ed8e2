//! # buildgen Build File Generators
//!
//! File: cli/src/generate/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The generators turn a project description into build-file text:
//!
//! - `makefile`: traditional GNU Makefile (C/C++, plus a simple Java variant)
//! - `cmake`: `CMakeLists.txt` (C/C++, plus a `UseJava` variant)
//! - `java`: the advanced Java Makefile (classpath, jar, run, packaging targets)
//!
//! ## Architecture
//!
//! Every renderer is a pure function from a `BuildConfig` (or
//! `JavaBuildConfig`) and the discovered `SourceFileSet` to a `String`. Nothing
//! here touches the filesystem except `write_artifact`, which the command
//! handlers call with the rendered text.
//!
use crate::common::fs::io;
use crate::core::config::Config;
use crate::core::error::{BuildgenError, Result};
use crate::core::model::{Architecture, BuildSystem, Language};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub mod cmake;
pub mod java;
pub mod makefile;

/// Everything a renderer needs to know about a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub language: Language,
    pub architecture: Architecture,
    pub project_name: String,
    pub compiler_flags: String,
    pub build_system: BuildSystem,
}

impl BuildConfig {
    /// Describes a project using the flags and build system stored in `config`.
    pub fn from_config(
        config: &Config,
        language: Language,
        architecture: Architecture,
        project_name: &str,
    ) -> Self {
        BuildConfig {
            language,
            architecture,
            project_name: project_name.to_string(),
            compiler_flags: config.compiler_flags(language).to_string(),
            build_system: config.preferred_build_system,
        }
    }

    /// Configured flags without architecture flags, then `extra`, then the
    /// selected architecture flag.
    ///
    /// At most one of `-m32`/`-m64` survives, and it always matches
    /// `architecture`.
    pub fn flags_with_arch(&self, extra: &[&str]) -> Vec<String> {
        let mut flags = self.base_flags();
        flags.extend(extra.iter().map(|f| f.to_string()));
        // Native builds carry no -m flag at all
        if let Some(flag) = self.architecture.flag() {
            flags.push(flag.to_string());
        }
        flags
    }

    /// Configured flags without architecture flags.
    pub fn base_flags(&self) -> Vec<String> {
        self.compiler_flags
            .split_whitespace()
            .filter(|f| !is_arch_flag(f))
            .map(str::to_string)
            .collect()
    }
}

fn is_arch_flag(flag: &str) -> bool {
    Architecture::ALL.iter().any(|a| a.flag() == Some(flag))
}

/// Java projects additionally carry their layout and classpath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaBuildConfig {
    pub base: BuildConfig,
    /// Directories holding `.java` files, relative to the project root.
    pub source_dirs: Vec<String>,
    /// Jar files put on the classpath, in order.
    pub external_jars: Vec<String>,
    /// Further classpath entries appended after the jars.
    pub additional_classpath: Vec<String>,
    /// Fully qualified entry class. Defaults to the project name.
    pub main_class: Option<String>,
    /// Manifest copied into the jar instead of the generated one.
    pub manifest_path: Option<String>,
}

impl JavaBuildConfig {
    pub fn new(base: BuildConfig) -> Self {
        JavaBuildConfig {
            base,
            source_dirs: Vec::new(),
            external_jars: Vec::new(),
            additional_classpath: Vec::new(),
            main_class: None,
            manifest_path: None,
        }
    }
}

/// The files buildgen can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Makefile,
    CMakeLists,
    JavaMakefile,
}

impl Artifact {
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Makefile | Artifact::JavaMakefile => "Makefile",
            Artifact::CMakeLists => "CMakeLists.txt",
        }
    }

    pub fn build_system(self) -> BuildSystem {
        match self {
            Artifact::Makefile | Artifact::JavaMakefile => BuildSystem::Make,
            Artifact::CMakeLists => BuildSystem::Cmake,
        }
    }
}

/// Writes `text` as `artifact` into `project_dir`, replacing any existing file.
pub fn write_artifact(project_dir: &Path, artifact: Artifact, text: &str) -> Result<PathBuf> {
    let path = project_dir.join(artifact.file_name());
    io::write_string_to_file(&path, text)
        .with_context(|| format!("Failed to write {}", artifact.file_name()))?;
    Ok(path)
}

/// Targets of the generated C/C++ Makefile that a binary may not be named
/// after.
const RESERVED_TARGETS: [&str; 3] = ["all", "clean", "obj"];

/// Accepts names made of ASCII letters, digits and underscores.
///
/// Java class names additionally may not start with a digit. C and C++ names
/// may not shadow a target of the generated Makefile.
pub fn validate_identifier(name: &str, language: Language) -> Result<()> {
    let valid_chars = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    let valid_start = language != Language::Java
        || !name.chars().next().is_some_and(|c| c.is_ascii_digit());
    let reserved = language != Language::Java && RESERVED_TARGETS.contains(&name);
    if valid_chars && valid_start && !reserved {
        Ok(())
    } else {
        Err(BuildgenError::InvalidName(name.to_string()).into())
    }
}
