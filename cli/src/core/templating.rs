//! # buildgen Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every file buildgen writes (Makefiles, CMakeLists.txt, the sample sources of
//! a new project) starts life as a Tera template stored in `cli/templates/` and
//! compiled into the binary with `include_str!`. This module owns the registry
//! of those templates and the one entry point used to render them.
//!
//! ## Architecture
//!
//! - Templates are registered under their file name (e.g. `makefile.tera`),
//!   once per process: the parsed engine is kept in a `OnceLock`.
//! - Autoescaping is disabled: the output is Makefile/CMake/C text, not HTML.
//! - Rendering errors are wrapped in `BuildgenError::Template` with the name of
//!   the template that failed.
//!
//! ## Examples
//!
//! ```rust
//! let mut context = tera::Context::new();
//! context.insert("project_name", "demo");
//! let text = templating::render(templating::MAKEFILE, &context)?;
//! ```
//!
use crate::core::error::{BuildgenError, Result};
use anyhow::anyhow;
use std::sync::OnceLock;
use tera::{Context, Tera};
use tracing::debug;

pub const MAKEFILE: &str = "makefile.tera";
pub const MAKEFILE_JAVA: &str = "makefile_java.tera";
pub const MAKEFILE_JAVA_ADVANCED: &str = "makefile_java_advanced.tera";
pub const CMAKE: &str = "cmake.tera";
pub const CMAKE_JAVA: &str = "cmake_java.tera";

pub const SCAFFOLD_MAIN_C: &str = "scaffold/main.c.tera";
pub const SCAFFOLD_MAIN_H: &str = "scaffold/main.h.tera";
pub const SCAFFOLD_MAIN_CPP: &str = "scaffold/main.cpp.tera";
pub const SCAFFOLD_MAIN_HPP: &str = "scaffold/main.hpp.tera";
pub const SCAFFOLD_MAIN_JAVA: &str = "scaffold/Main.java.tera";
pub const SCAFFOLD_README: &str = "scaffold/README.md.tera";

/// Extension stripped from a template name to get the file it produces.
pub const TEMPLATE_EXTENSION: &str = ".tera";

const TEMPLATES: &[(&str, &str)] = &[
    (MAKEFILE, include_str!("../../templates/makefile.tera")),
    (MAKEFILE_JAVA, include_str!("../../templates/makefile_java.tera")),
    (
        MAKEFILE_JAVA_ADVANCED,
        include_str!("../../templates/makefile_java_advanced.tera"),
    ),
    (CMAKE, include_str!("../../templates/cmake.tera")),
    (CMAKE_JAVA, include_str!("../../templates/cmake_java.tera")),
    (SCAFFOLD_MAIN_C, include_str!("../../templates/scaffold/main.c.tera")),
    (SCAFFOLD_MAIN_H, include_str!("../../templates/scaffold/main.h.tera")),
    (SCAFFOLD_MAIN_CPP, include_str!("../../templates/scaffold/main.cpp.tera")),
    (SCAFFOLD_MAIN_HPP, include_str!("../../templates/scaffold/main.hpp.tera")),
    (SCAFFOLD_MAIN_JAVA, include_str!("../../templates/scaffold/Main.java.tera")),
    (SCAFFOLD_README, include_str!("../../templates/scaffold/README.md.tera")),
];

static ENGINE: OnceLock<Tera> = OnceLock::new();

/// Builds a Tera instance holding every embedded template.
fn build_engine() -> Result<Tera> {
    let mut tera = Tera::default();
    // Output is Makefile/CMake/C text, never HTML
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(TEMPLATES.iter().copied())
        .map_err(|e| anyhow!(BuildgenError::Template { source: e }))?;
    debug!("Registered {} embedded templates", TEMPLATES.len());
    Ok(tera)
}

/// The shared engine, parsed on first use.
fn engine() -> Result<&'static Tera> {
    if let Some(tera) = ENGINE.get() {
        return Ok(tera);
    }
    let tera = build_engine()?;
    // A concurrent first call may have won; either instance is identical
    Ok(ENGINE.get_or_init(|| tera))
}

/// Renders the embedded template `name` with `context`.
pub fn render(name: &str, context: &Context) -> Result<String> {
    debug!("Rendering template '{}'", name);
    let tera = engine()?;
    tera.render(name, context).map_err(|e| {
        anyhow!(BuildgenError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })
}

/// File name a scaffold template produces: `scaffold/main.c.tera` -> `main.c`.
pub fn output_file_name(template_name: &str) -> &str {
    let base = template_name.rsplit('/').next().unwrap_or(template_name);
    base.strip_suffix(TEMPLATE_EXTENSION).unwrap_or(base)
}
