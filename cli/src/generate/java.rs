//! # Advanced Java Makefile Renderer
//!
//! File: cli/src/generate/java.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders the extended Java Makefile: compilation into `build/classes` with
//! one pattern rule per source directory, a jar under `build/dist`, and the
//! `run`, `run-jar`, `clean`, `rebuild`, `info`, `install-deps`,
//! `src-package` and `help` targets.
//!
//! The classpath is the classes directory followed by the external jars and
//! any additional entries, joined with the platform separator. The jar
//! manifest is either generated with a single `Main-Class` line or copied from
//! a user-supplied file.
//!
use crate::common::fs::discovery::SourceFileSet;
use crate::core::error::Result;
use crate::core::templating;
use crate::generate::JavaBuildConfig;
use tera::Context;

/// Source directory used when nothing else is known.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Separator between classpath entries on the host platform.
pub fn classpath_separator() -> &'static str {
    if cfg!(windows) {
        ";"
    } else {
        ":"
    }
}

/// Top-level directories holding `.java` files, for use as `SRC_DIRS`.
///
/// Falls back to `src` when nothing was discovered.
pub fn infer_source_dirs(sources: &SourceFileSet) -> Vec<String> {
    let dirs = sources.top_level_dirs();
    if dirs.is_empty() {
        vec![DEFAULT_SOURCE_DIR.to_string()]
    } else {
        dirs
    }
}

/// Trims trailing slashes and drops duplicates. When the project root is one
/// of the directories it is the only one kept: `find .` already reaches every
/// subdirectory, and a second pattern rule would invent class files javac
/// never writes.
fn normalize_source_dirs(dirs: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for dir in dirs {
        let trimmed = dir.trim_end_matches('/');
        let dir = if trimmed.is_empty() { "." } else { trimmed };
        if dir == "." {
            return vec![".".to_string()];
        }
        if !normalized.iter().any(|d| d == dir) {
            normalized.push(dir.to_string());
        }
    }
    if normalized.is_empty() {
        normalized.push(DEFAULT_SOURCE_DIR.to_string());
    }
    normalized
}

/// Renders the advanced Java Makefile for `config`.
pub fn render_java_makefile(config: &JavaBuildConfig) -> Result<String> {
    let separator = classpath_separator();

    let source_dirs = normalize_source_dirs(&config.source_dirs);

    let classpath: Vec<&str> = std::iter::once("$(CLASSES_DIR)")
        .chain(config.external_jars.iter().map(String::as_str))
        .chain(config.additional_classpath.iter().map(String::as_str))
        .collect();

    let main_class = config
        .main_class
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(&config.base.project_name);

    let mut context = Context::new();
    context.insert("project_name", &config.base.project_name);
    context.insert("main_class", main_class);
    context.insert("source_dirs", &source_dirs);
    context.insert("classpath", &classpath.join(separator));
    context.insert("sourcepath", &source_dirs.join(separator));
    context.insert("java_flags", &config.base.base_flags().join(" "));
    context.insert("manifest_path", config.manifest_path.as_deref().unwrap_or(""));
    templating::render(templating::MAKEFILE_JAVA_ADVANCED, &context)
}
