//! # buildgen UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal interaction helpers. Currently this is the `prompts` submodule,
//! which implements the question/answer primitives used by the interactive
//! menu (`commands::menu`), drawn with `dialoguer` on a terminal and read line
//! by line otherwise.
//!
//! ```rust
//! use crate::common::ui::prompts::{LinePrompter, Prompt};
//!
//! let stdin = std::io::stdin();
//! let mut prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
//! let name = prompter.ask_with_default("Enter target name", "demo")?;
//! ```
//!

/// Free-text and numbered-choice prompts (`dialoguer` or line-based).
pub mod prompts;
