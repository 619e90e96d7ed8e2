//! # buildgen Summary Command
//!
//! File: cli/src/commands/summary.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `buildgen summary --lang <LANG>` and menu option 1: runs source
//! discovery in the project directory and lists what it found, compile units
//! first, then headers for C and C++.
//!
//! ```bash
//! buildgen summary --lang c++
//! buildgen -C ~/src/engine summary -l c
//! ```
//!
use crate::commands::Session;
use crate::common::fs::discovery::{self, SourceFileSet};
use crate::core::error::Result;
use crate::core::model::Language;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::info;

/// Arguments for `buildgen summary`.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Language whose files should be listed.
    #[arg(long, short = 'l', value_enum)]
    pub lang: Language,
}

pub fn handle_summary(args: SummaryArgs, session: &Session) -> Result<()> {
    let sources = discovery::discover_sources(&session.project_dir, args.lang)?;
    let stdout = std::io::stdout();
    print_summary(&mut stdout.lock(), &sources)
}

/// Writes the source/header listing for `sources` to `out`.
pub fn print_summary<W: Write>(out: &mut W, sources: &SourceFileSet) -> Result<()> {
    let language = sources.language();
    info!("Summarizing {} {} files", sources.len(), language);

    if sources.is_empty() {
        writeln!(out, "\nNo {} source files found.", language).context("Failed to write summary")?;
        return Ok(());
    }

    let units: Vec<&str> = sources.sources().collect();
    let headers: Vec<&str> = sources.headers().collect();

    writeln!(out, "\nSource Files Found:").context("Failed to write summary")?;
    writeln!(out, "{}", "-".repeat(40)).context("Failed to write summary")?;
    let title = if language == Language::Java {
        "Java Files"
    } else {
        "Source Files"
    };
    writeln!(out, "{} ({}):", title, units.len()).context("Failed to write summary")?;
    for file in &units {
        writeln!(out, "  - {}", file).context("Failed to write summary")?;
    }

    if !headers.is_empty() {
        writeln!(out, "\nHeader Files ({}):", headers.len()).context("Failed to write summary")?;
        for file in &headers {
            writeln!(out, "  - {}", file).context("Failed to write summary")?;
        }
    }
    Ok(())
}
