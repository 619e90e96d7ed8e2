//! # buildgen Project Model
//!
//! File: cli/src/core/model.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The small vocabulary every other module speaks: which language a project is
//! written in, which word size it targets, and which build system the user
//! prefers. Each enum carries its JSON spelling (via `serde`), its command-line
//! spelling (via `clap::ValueEnum`) and its menu/display spelling (`Display` and
//! `FromStr`).
//!
//! The language determines the extension set used by discovery, the compiler,
//! and the key under which its flags are stored in the configuration.
//!
use crate::core::error::BuildgenError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    #[serde(rename = "C")]
    #[value(name = "c")]
    C,
    #[serde(rename = "C++")]
    #[value(name = "c++", alias = "cpp", alias = "cxx")]
    Cpp,
    #[serde(rename = "Java")]
    #[value(name = "java")]
    Java,
}

impl Language {
    /// All languages, in menu order.
    pub const ALL: [Language; 3] = [Language::C, Language::Cpp, Language::Java];

    /// Every extension discovery collects for this language.
    ///
    /// `h` is deliberately part of both the C and the C++ sets; a header in a
    /// mixed directory is reported for whichever language was asked for.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "cc", "hpp", "h"],
            Language::Java => &["java"],
        }
    }

    /// Extensions of files that are compiled on their own.
    pub fn source_extensions(self) -> &'static [&'static str] {
        match self {
            Language::C => &["c"],
            Language::Cpp => &["cpp", "cc"],
            Language::Java => &["java"],
        }
    }

    /// True when `ext` names a compile unit (as opposed to a header).
    pub fn is_source_extension(self, ext: &str) -> bool {
        self.source_extensions().contains(&ext)
    }

    pub fn compiler(self) -> &'static str {
        match self {
            Language::C => "gcc",
            Language::Cpp => "g++",
            Language::Java => "javac",
        }
    }

    /// Key under which this language's flags live in `default_compiler_flags`.
    pub fn config_key(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
        }
    }

    pub fn default_flags(self) -> &'static str {
        match self {
            Language::C => "-Wall -Wextra -O2",
            Language::Cpp => "-Wall -Wextra -O2 -std=c++17",
            Language::Java => "-Xlint:all",
        }
    }

    /// Language tag used in CMake's `project()` and `CMAKE_<LANG>_FLAGS`.
    pub fn cmake_language(self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "CXX",
            Language::Java => "Java",
        }
    }

    /// Source file CMake falls back to when no discovery has run.
    pub fn entry_file(self) -> &'static str {
        match self {
            Language::C => "main.c",
            Language::Cpp => "main.cpp",
            Language::Java => "Main.java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

impl FromStr for Language {
    type Err = BuildgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Language::C),
            "c++" | "cpp" | "cxx" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            _ => Err(BuildgenError::InvalidValue {
                kind: "language",
                value: s.to_string(),
                expected: "C, C++, Java",
            }),
        }
    }
}

/// Target word size of the generated build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Architecture {
    #[serde(rename = "32")]
    #[value(name = "32")]
    X32,
    #[default]
    #[serde(rename = "64")]
    #[value(name = "64")]
    X64,
    #[serde(rename = "native")]
    #[value(name = "native")]
    Native,
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [Architecture::X64, Architecture::X32, Architecture::Native];

    /// Compiler flag selecting this architecture, `None` for native builds.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Architecture::X32 => Some("-m32"),
            Architecture::X64 => Some("-m64"),
            Architecture::Native => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Architecture::X32 => "32",
            Architecture::X64 => "64",
            Architecture::Native => "native",
        }
    }

    /// Human label used in menus and generated comments.
    pub fn label(self) -> &'static str {
        match self {
            Architecture::X32 => "32-bit",
            Architecture::X64 => "64-bit",
            Architecture::Native => "Native",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = BuildgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "32" => Ok(Architecture::X32),
            "64" => Ok(Architecture::X64),
            "native" => Ok(Architecture::Native),
            _ => Err(BuildgenError::InvalidValue {
                kind: "architecture",
                value: s.to_string(),
                expected: "32, 64, native",
            }),
        }
    }
}

/// Which kind of build file the user prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    #[default]
    Make,
    Cmake,
}

impl BuildSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildSystem::Make => "make",
            BuildSystem::Cmake => "cmake",
        }
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildSystem {
    type Err = BuildgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "make" => Ok(BuildSystem::Make),
            "cmake" => Ok(BuildSystem::Cmake),
            _ => Err(BuildgenError::InvalidValue {
                kind: "build system",
                value: s.to_string(),
                expected: "make, cmake",
            }),
        }
    }
}
