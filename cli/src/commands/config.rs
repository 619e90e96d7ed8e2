//! # buildgen Config Command
//!
//! File: cli/src/commands/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `buildgen config <show|path|reset>`, the non-interactive side of
//! configuration management. Editing individual settings is done through the
//! interactive menu (option 6) or by editing the JSON file directly.
//!
//! ```bash
//! buildgen config show
//! BUILDGEN_CONFIG=~/.buildgen.json buildgen config reset
//! ```
//!
use crate::commands::Session;
use crate::core::config::{save_config, Config};
use crate::core::error::Result;
use crate::core::model::Language;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing::info;

/// Arguments for `buildgen config`.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the current settings.
    Show,
    /// Print the location of the configuration file.
    Path,
    /// Restore and save the default settings.
    Reset,
}

pub fn handle_config(args: ConfigArgs, session: &mut Session) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.command {
        ConfigCommand::Show => print_config(&mut out, &session.config),
        ConfigCommand::Path => {
            writeln!(out, "{}", session.config_path.display()).context("Failed to write output")
        }
        ConfigCommand::Reset => {
            session.config = Config::default();
            save_config(&session.config_path, &session.config)?;
            info!("Configuration reset at {}", session.config_path.display());
            writeln!(
                out,
                "Configuration reset to defaults and saved to {}",
                session.config_path.display()
            )
            .context("Failed to write output")
        }
    }
}

/// Writes a readable listing of `config`.
pub fn print_config<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    let lines = [
        "Current Configuration:".to_string(),
        format!("  Default Architecture: {}", config.default_architecture),
        format!("  Default Project Directory: {}", config.default_project_dir),
        format!("  Preferred Build System: {}", config.preferred_build_system),
        format!("  Auto Create Directories: {}", config.auto_create_directories),
        "  Compiler Flags:".to_string(),
    ];
    for line in lines {
        writeln!(out, "{}", line).context("Failed to write output")?;
    }
    for lang in Language::ALL {
        writeln!(out, "    {}: {}", lang, config.compiler_flags(lang))
            .context("Failed to write output")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::load_or_init;
    use crate::core::model::Architecture;
    use tempfile::tempdir;

    /// Tests the configuration listing.
    #[test]
    fn test_print_config() -> Result<()> {
        let mut config = Config::default();
        config.default_architecture = Architecture::Native;
        config.set_compiler_flags(Language::C, "-O0 -g");

        let mut out = Vec::new();
        print_config(&mut out, &config)?;
        let text = String::from_utf8(out)?;

        assert!(text.contains("Default Architecture: native\n"));
        assert!(text.contains("Preferred Build System: make\n"));
        assert!(text.contains("    C: -O0 -g\n"));
        assert!(text.contains("    C++: -Wall -Wextra -O2 -std=c++17\n"));
        assert!(text.contains("    Java: -Xlint:all\n"));
        Ok(())
    }

    /// Tests that `config reset` saves the defaults.
    #[test]
    fn test_reset_restores_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("buildgen_config.json");
        let mut changed = Config::default();
        changed.auto_create_directories = false;
        save_config(&path, &changed)?;

        let mut session = Session::open(&path, dir.path())?;
        assert!(!session.config.auto_create_directories);

        let args = ConfigArgs::try_parse_from(["config", "reset"])?;
        handle_config(args, &mut session)?;

        assert_eq!(session.config, Config::default());
        assert_eq!(load_or_init(&path)?, Config::default());
        Ok(())
    }

    #[test]
    fn test_parses_config_subcommands() {
        for sub in ["show", "path", "reset"] {
            assert!(ConfigArgs::try_parse_from(["config", sub]).is_ok());
        }
        assert!(ConfigArgs::try_parse_from(["config", "edit"]).is_err());
    }
}
