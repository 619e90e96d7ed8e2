//! # CMakeLists.txt Renderer
//!
//! File: cli/src/generate/cmake.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders a `CMakeLists.txt`. C and C++ projects get a single executable
//! target built from the discovered compile units, the language standard
//! (C11 / C++17), quoted `add_compile_options` and, unless the architecture is
//! native, the `-m32`/`-m64` flag appended to `CMAKE_C_FLAGS` or
//! `CMAKE_CXX_FLAGS`. Java projects get a `UseJava` jar target instead.
//!
//! When `sources` is `None` (no discovery has run for this session) the
//! language's fixed entry file is listed instead.
//!
use crate::common::fs::discovery::SourceFileSet;
use crate::core::error::Result;
use crate::core::model::Language;
use crate::core::templating;
use crate::generate::BuildConfig;
use tera::Context;

/// Renders `CMakeLists.txt` for `config`.
pub fn render_cmake(config: &BuildConfig, sources: Option<&SourceFileSet>) -> Result<String> {
    let language = config.language;
    // The arch flag goes into CMAKE_<LANG>_FLAGS, not add_compile_options
    let compile_options = quoted_flags(&config.base_flags());

    let mut context = Context::new();
    context.insert("project_name", &config.project_name);
    context.insert("compile_options", &compile_options);

    if language == Language::Java {
        context.insert("main_class", &config.project_name);
        return templating::render(templating::CMAKE_JAVA, &context);
    }

    let (standard_variable, standard_version) = match language {
        Language::C => ("C_STANDARD", "11"),
        _ => ("CXX_STANDARD", "17"),
    };

    let source_list: Vec<String> = match sources {
        Some(set) => set.sources().map(str::to_string).collect(),
        None => vec![language.entry_file().to_string()],
    };

    context.insert("cmake_language", language.cmake_language());
    context.insert("standard_variable", standard_variable);
    context.insert("standard_version", standard_version);
    context.insert("arch_flag", config.architecture.flag().unwrap_or(""));
    context.insert("arch_label", config.architecture.label());
    context.insert("sources", &source_list);
    templating::render(templating::CMAKE, &context)
}

fn quoted_flags(flags: &[String]) -> String {
    flags
        .iter()
        .map(|f| format!("\"{}\"", f))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Architecture, BuildSystem};

    fn config(language: Language, architecture: Architecture) -> BuildConfig {
        BuildConfig {
            language,
            architecture,
            project_name: "demo".to_string(),
            compiler_flags: language.default_flags().to_string(),
            build_system: BuildSystem::Cmake,
        }
    }

    /// Tests a 32-bit C++ project: standard, options and sources.
    #[test]
    fn test_cpp_32() -> Result<()> {
        let sources = SourceFileSet::new(Language::Cpp, ["main.cpp", "util.hpp"]);
        let text = render_cmake(&config(Language::Cpp, Architecture::X32), Some(&sources))?;

        assert!(text.contains("project(demo CXX)"));
        assert!(text.contains("set(CMAKE_CXX_STANDARD 17)\nset(CMAKE_CXX_STANDARD_REQUIRED ON)"));
        assert!(text.contains(
            "add_compile_options(\"-Wall\" \"-Wextra\" \"-O2\" \"-std=c++17\")\n\n# Set architecture to 32-bit\n"
        ));
        assert!(text.contains("set(CMAKE_CXX_FLAGS \"${CMAKE_CXX_FLAGS} -m32\")"));
        assert!(!text.contains("-m64"));
        assert!(!text.contains("CMAKE_C_FLAGS"));
        assert!(text.contains("set(SOURCES\n    main.cpp\n)"));
        Ok(())
    }

    /// Tests that native builds emit no architecture flag.
    #[test]
    fn test_c_native_has_no_arch_block() -> Result<()> {
        let sources = SourceFileSet::new(Language::C, ["main.c", "lib/util.c", "util.h"]);
        let text = render_cmake(&config(Language::C, Architecture::Native), Some(&sources))?;

        assert!(text.contains("set(CMAKE_C_STANDARD 11)"));
        assert!(!text.contains("-m32"));
        assert!(!text.contains("-m64"));
        assert!(!text.contains("Set architecture"));
        assert!(text.contains("add_compile_options(\"-Wall\" \"-Wextra\" \"-O2\")\n\n# Set output directories"));
        assert!(text.contains("set(SOURCES\n    lib/util.c\n    main.c\n)"));
        Ok(())
    }

    /// Tests that an `-m32` in the configured flags gives way to the selected `-m64`.
    #[test]
    fn test_configured_arch_flag_is_not_duplicated() -> Result<()> {
        let mut cfg = config(Language::C, Architecture::X64);
        cfg.compiler_flags = "-O2 -m32".to_string();
        let text = render_cmake(&cfg, None)?;

        assert!(text.contains("add_compile_options(\"-O2\")"));
        assert!(!text.contains("-m32"));
        assert_eq!(text.matches("-m64").count(), 1);
        Ok(())
    }

    /// Tests the fixed entry file used when discovery did not run.
    #[test]
    fn test_no_discovery_uses_entry_file() -> Result<()> {
        let text = render_cmake(&config(Language::Cpp, Architecture::X64), None)?;
        assert!(text.contains("set(SOURCES\n    main.cpp\n)"));
        Ok(())
    }

    /// Tests an empty source list after an empty discovery.
    #[test]
    fn test_empty_discovery_lists_nothing() -> Result<()> {
        let sources = SourceFileSet::new(Language::C, Vec::<String>::new());
        let text = render_cmake(&config(Language::C, Architecture::X64), Some(&sources))?;
        assert!(text.contains("set(SOURCES\n)"));
        Ok(())
    }

    /// Tests the `UseJava` variant.
    #[test]
    fn test_java_variant() -> Result<()> {
        let text = render_cmake(&config(Language::Java, Architecture::X64), None)?;

        assert!(text.contains("project(demo Java)"));
        assert!(text.contains("include(UseJava)"));
        assert!(text.contains("set(CMAKE_JAVA_COMPILE_FLAGS \"-Xlint:all\")"));
        assert!(text.contains("    ENTRY_POINT demo\n"));
        assert!(text.contains("install_jar(${PROJECT_NAME} DESTINATION bin)"));
        Ok(())
    }
}
