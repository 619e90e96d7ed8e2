//! # buildgen Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout buildgen. Specific,
//! matchable failures are variants of `BuildgenError`; everything else flows
//! through `anyhow` so that I/O failures can carry the path they were about.
//!
//! ## Architecture
//!
//! - `BuildgenError`: A custom error enum using `thiserror`
//! - `Result<T>`: A type alias for `anyhow::Result<T>`
//!
//! The error types cover:
//! - Configuration errors (unreadable or unwritable config file)
//! - Filesystem errors (path exists but has the wrong kind)
//! - Source discovery errors (walk failures on the project root)
//! - Template rendering errors
//! - User input errors (invalid names, unknown values, closed stdin)
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !is_valid_identifier(name) {
//!     return Err(BuildgenError::InvalidName(name.to_string()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for buildgen.
#[derive(Error, Debug)]
pub enum BuildgenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Source discovery failed: {source}")]
    Discovery {
        #[from]
        source: walkdir::Error,
    },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Invalid name '{0}': use only letters, digits and underscores.")]
    InvalidName(String),

    #[error("Invalid {kind} '{value}'. Expected one of: {expected}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Input closed before an answer was given.")]
    InputClosed,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the user-facing error messages.
    #[test]
    fn test_error_display() {
        let config_err = BuildgenError::Config("file is read-only".to_string());
        assert_eq!(config_err.to_string(), "Configuration error: file is read-only");

        let name_err = BuildgenError::InvalidName("my app".into());
        assert_eq!(
            name_err.to_string(),
            "Invalid name 'my app': use only letters, digits and underscores."
        );

        let value_err = BuildgenError::InvalidValue {
            kind: "architecture",
            value: "128".into(),
            expected: "32, 64, native",
        };
        assert_eq!(
            value_err.to_string(),
            "Invalid architecture '128'. Expected one of: 32, 64, native"
        );
    }
}
