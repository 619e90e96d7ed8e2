//! # Traditional Makefile Renderer
//!
//! File: cli/src/generate/makefile.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders a classic GNU Makefile. For C and C++ it defines `CC`/`CFLAGS`,
//! collects sources with `$(wildcard ...)` over every directory that holds a
//! discovered compile unit, compiles into `obj/` with dependency files, and
//! links a binary named after the project. `CFLAGS` is the configured flags,
//! `-I.`, then the architecture flag (`-m32`, `-m64`, or nothing for native).
//!
//! Java projects get a small Makefile compiling into `build/` and running the
//! project's main class.
//!
use crate::common::fs::discovery::SourceFileSet;
use crate::core::error::Result;
use crate::core::model::Language;
use crate::core::templating;
use crate::generate::BuildConfig;
use tera::Context;

/// Renders the traditional Makefile for `config`.
pub fn render_makefile(config: &BuildConfig, sources: &SourceFileSet) -> Result<String> {
    match config.language {
        Language::Java => render_java(config),
        Language::C | Language::Cpp => render_native(config, sources),
    }
}

fn render_native(config: &BuildConfig, sources: &SourceFileSet) -> Result<String> {
    let language = config.language;

    // The include path goes between the configured flags and the arch flag
    let cflags = config.flags_with_arch(&["-I."]);

    let mut dirs = sources.source_dirs();
    if dirs.is_empty() {
        dirs.push(String::new());
    }
    let patterns: Vec<String> = dirs
        .iter()
        .flat_map(|dir| {
            language
                .source_extensions()
                .iter()
                .map(move |ext| format!("$(wildcard {}*.{})", dir, ext))
        })
        .collect();

    let mut context = Context::new();
    context.insert("project_name", &config.project_name);
    context.insert("language", &language.to_string());
    context.insert("architecture", config.architecture.as_str());
    context.insert("compiler", language.compiler());
    context.insert("cflags", &cflags.join(" "));
    context.insert("source_patterns", &patterns.join(" "));
    context.insert("source_extensions", language.source_extensions());
    templating::render(templating::MAKEFILE, &context)
}

fn render_java(config: &BuildConfig) -> Result<String> {
    let mut flags = config.base_flags();
    flags.extend(["-d".to_string(), "build".to_string()]);

    let mut context = Context::new();
    context.insert("project_name", &config.project_name);
    context.insert("java_flags", &flags.join(" "));
    context.insert("main_class", &config.project_name);
    templating::render(templating::MAKEFILE_JAVA, &context)
}
