//! # buildgen Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the foundational pieces shared by every command:
//! - `config`: Loading, saving and validating the persisted JSON preferences
//! - `error`: Error types and the `Result` alias
//! - `model`: Language, architecture and build-system enums
//! - `templating`: The embedded Tera templates and the render entry point
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{BuildgenError, Result}; // For error handling
//! use crate::core::model::Language;
//! use crate::core::templating; // For rendering build files
//! ```
//!
pub mod config;
pub mod error;
pub mod model;
pub mod templating;
