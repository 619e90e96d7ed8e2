//! # buildgen Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from
//! command-specific logic (`commands::`), the generators (`generate::`) and the
//! core infrastructure (`core::`):
//!
//! - **`fs`**: Source discovery and basic file I/O.
//! - **`ui`**: Interactive prompts for the menu.
//!

/// Utilities for filesystem operations (discovery, I/O).
pub mod fs;
/// Utilities for terminal interaction (prompts).
pub mod ui;
