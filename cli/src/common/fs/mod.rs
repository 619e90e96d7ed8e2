//! # buildgen Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the commands:
//!
//! - **`discovery`**: Recursive source discovery per language, skipping `obj/`
//!   and `build/`, plus the lookup of external jars under `lib/`.
//! - **`io`**: `ensure_dir_exists`, `read_file_to_string` and
//!   `write_string_to_file`, each adding the path to any error.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{discovery, io};
//!
//! let sources = discovery::discover_sources(project_dir, Language::C)?;
//! io::write_string_to_file(&project_dir.join("Makefile"), &text)?;
//! ```
//!

/// Source file discovery (`discover_sources`, `find_external_jars`).
pub mod discovery;
/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
