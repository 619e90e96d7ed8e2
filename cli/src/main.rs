//! # buildgen Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the buildgen CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the session (configuration file and project directory)
//! - Routing execution to the appropriate command handler, or to the
//!   interactive menu when no subcommand is given
//!
//! ## Examples
//!
//! ```bash
//! # Interactive menu in the current directory
//! buildgen
//!
//! # Generate a Makefile for the C sources under ~/src/calc
//! buildgen -C ~/src/calc makefile --lang c
//!
//! # Use another configuration file, with debug logging
//! buildgen -vv --config ./team_config.json generate -l c++
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Open the session and route to the command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers and the interactive menu
mod common; // Shared utilities (filesystem, prompts)
mod core; // Core infrastructure (errors, config, model, templating)
mod generate; // Build file renderers

use crate::commands::Session;
use crate::core::config::DEFAULT_CONFIG_FILENAME;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "buildgen",
    about = "Build System Generator: Makefiles and CMake files for C, C++ and Java",
    long_about = "Discovers C, C++ and Java sources and generates traditional Makefiles,\n\
                  CMakeLists.txt files and advanced Java Makefiles.\n\
                  Run without a subcommand for the interactive menu.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (created with defaults when missing).
    #[arg(long, global = true, env = "BUILDGEN_CONFIG", default_value = DEFAULT_CONFIG_FILENAME)]
    config: String,

    /// Project directory to discover sources in and write build files to.
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    dir: String,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// List the source and header files found in the project directory.
    #[command(alias = "s")]
    Summary(commands::summary::SummaryArgs),
    /// Generate a traditional Makefile.
    #[command(alias = "m")]
    Makefile(commands::generate::MakefileArgs),
    /// Generate a CMakeLists.txt.
    #[command(alias = "c")]
    Cmake(commands::generate::CmakeArgs),
    /// Generate the build file of the preferred build system.
    #[command(alias = "g")]
    Generate(commands::generate::MakefileArgs),
    /// Generate an advanced Java Makefile (jar, run, packaging targets).
    #[command(alias = "j")]
    JavaMakefile(commands::generate::JavaMakefileArgs),
    /// Create a new project with sample sources.
    #[command(alias = "n")]
    New(commands::new::NewArgs),
    /// Show, locate or reset the configuration.
    Config(commands::config::ConfigArgs),
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut session = Session::open(&expand_path(&cli.config), &expand_path(&cli.dir))?;

    match cli.command {
        None => commands::menu::run_menu(&mut session),
        Some(Commands::Summary(args)) => commands::summary::handle_summary(args, &session),
        Some(Commands::Makefile(args)) => commands::generate::handle_makefile(args, &session),
        Some(Commands::Cmake(args)) => commands::generate::handle_cmake(args, &session),
        Some(Commands::Generate(args)) => commands::generate::handle_generate(args, &session),
        Some(Commands::JavaMakefile(args)) => {
            commands::generate::handle_java_makefile(args, &session)
        }
        Some(Commands::New(args)) => commands::new::handle_new(args, &mut session),
        Some(Commands::Config(args)) => commands::config::handle_config(args, &mut session),
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
