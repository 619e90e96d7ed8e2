//! # buildgen Interactive Menu
//!
//! File: cli/src/commands/menu.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The numbered menu shown when `buildgen` runs without a subcommand:
//!
//! ```text
//! 1. Show source files summary
//! 2. Generate traditional Makefile
//! 3. Generate CMake files
//! 4. Generate advanced Java Makefile
//! 5. Start new project
//! 6. Configuration management
//! 7. Exit
//! ```
//!
//! Every option routes to the same handlers the subcommands use
//! (`generate`, `new`, `summary`). A failing action prints `Error: ...` and
//! the menu comes back; end of input (Ctrl-D, or a closed pipe) exits cleanly
//! from any prompt.
//!
//! On a terminal the questions are `dialoguer` widgets; with piped input each
//! answer is one line, choices given by number.
//!
//! The configuration submenu edits a copy of the loaded configuration. Only
//! "Save and return" writes it to disk and makes it the session's
//! configuration; "Cancel" discards the copy.
//!
use crate::commands::{generate, new, summary, Session};
use crate::common::fs::discovery;
use crate::common::ui::prompts::{LinePrompter, Prompt, TermPrompter};
use crate::core::config::{save_config, Config};
use crate::core::error::{BuildgenError, Result};
use crate::core::model::{Architecture, BuildSystem, Language};
use crate::generate::java::infer_source_dirs;
use crate::generate::{validate_identifier, BuildConfig, JavaBuildConfig};
use std::io::IsTerminal;
use tracing::{debug, error};

const TITLE: &str = "Build System Generator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAction {
    Summary,
    Makefile,
    Cmake,
    JavaMakefile,
    NewProject,
    Configure,
    Exit,
}

const MAIN_MENU: [(&str, MainAction); 7] = [
    ("Show source files summary", MainAction::Summary),
    ("Generate traditional Makefile", MainAction::Makefile),
    ("Generate CMake files", MainAction::Cmake),
    ("Generate advanced Java Makefile", MainAction::JavaMakefile),
    ("Start new project", MainAction::NewProject),
    ("Configuration management", MainAction::Configure),
    ("Exit", MainAction::Exit),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigAction {
    Architecture,
    ProjectDir,
    BuildSystem,
    AutoCreate,
    CompilerFlags,
    Save,
    Cancel,
    Reset,
}

/// Runs the menu on the terminal until the user exits.
pub fn run_menu(session: &mut Session) -> Result<()> {
    // dialoguer needs a terminal to read keys from and draw on
    if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
        debug!("Terminal detected, using dialoguer prompts");
        run(session, &mut TermPrompter::new())
    } else {
        debug!("Input is not a terminal, reading answers line by line");
        let stdin = std::io::stdin();
        run(session, &mut LinePrompter::new(stdin.lock(), std::io::stdout()))
    }
}

/// Runs the menu over an arbitrary prompter.
pub fn run<P: Prompt>(session: &mut Session, p: &mut P) -> Result<()> {
    loop {
        p.header(TITLE)?;
        p.say(&format!("Project directory: {}", session.project_dir.display()))?;

        let action = match p.choose("Main Menu:", &MAIN_MENU, None) {
            Ok(action) => action,
            Err(e) if is_input_closed(&e) => return Ok(()),
            Err(e) => return Err(e),
        };
        debug!("Main menu choice: {:?}", action);

        let outcome = match action {
            MainAction::Summary => show_summary(session, p),
            MainAction::Makefile => makefile_flow(session, p),
            MainAction::Cmake => cmake_flow(session, p),
            MainAction::JavaMakefile => java_flow(session, p),
            MainAction::NewProject => new_project_flow(session, p),
            MainAction::Configure => config_menu(session, p),
            MainAction::Exit => {
                p.say(&format!("\nThank you for using {}!", TITLE))?;
                return Ok(());
            }
        };

        // Actions fail without ending the session, except on closed input
        if let Err(e) = outcome {
            if is_input_closed(&e) {
                return Ok(());
            }
            error!("Menu action failed: {:?}", e);
            p.say(&format!("\nError: {:#}", e))?;
        }
    }
}

fn is_input_closed(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<BuildgenError>(),
        Some(BuildgenError::InputClosed)
    )
}

fn choose_language<P: Prompt>(p: &mut P) -> Result<Language> {
    let options: Vec<(&str, Language)> = Language::ALL
        .iter()
        .map(|lang| (lang.config_key(), *lang))
        .collect();
    p.choose("Select language:", &options, None)
}

fn choose_architecture<P: Prompt>(p: &mut P, current: Architecture) -> Result<Architecture> {
    let options: Vec<(&str, Architecture)> = Architecture::ALL
        .iter()
        .map(|arch| (arch.label(), *arch))
        .collect();
    // The current value is preselected
    let default = Architecture::ALL.iter().position(|a| *a == current);
    p.choose("Select target architecture:", &options, default)
}

/// Asks for a name until it is a valid identifier for `language`.
fn ask_name<P: Prompt>(p: &mut P, label: &str, default: &str, language: Language) -> Result<String> {
    loop {
        let name = p.ask_with_default(label, default)?;
        match validate_identifier(&name, language) {
            Ok(()) => return Ok(name),
            Err(e) => {
                debug!("Rejected name: {:#}", e);
                p.say("Invalid name! Use only letters, digits and underscores.")?;
            }
        }
    }
}

fn show_summary<P: Prompt>(session: &Session, p: &mut P) -> Result<()> {
    let language = choose_language(p)?;
    let sources = discovery::discover_sources(&session.project_dir, language)?;
    summary::print_summary(&mut p.output(), &sources)
}

/// Language, discovery, name and architecture: the questions every native
/// build file needs answered.
fn ask_build<P: Prompt>(
    session: &Session,
    p: &mut P,
) -> Result<(BuildConfig, discovery::SourceFileSet)> {
    let language = choose_language(p)?;
    let sources = generate::discover(&mut p.output(), session, language)?;
    let name = ask_name(
        p,
        "\nEnter target name",
        &session.default_target_name(language),
        language,
    )?;
    let arch = choose_architecture(p, session.config.default_architecture)?;
    let build = BuildConfig::from_config(&session.config, language, arch, &name);
    Ok((build, sources))
}

fn makefile_flow<P: Prompt>(session: &Session, p: &mut P) -> Result<()> {
    let (build, sources) = ask_build(session, p)?;
    let generated = generate::generate_makefile(session, &build, &sources)?;
    generate::print_success(&mut p.output(), &generated)
}

fn cmake_flow<P: Prompt>(session: &Session, p: &mut P) -> Result<()> {
    let (build, sources) = ask_build(session, p)?;
    let generated = generate::generate_cmake(session, &build, Some(&sources))?;
    generate::print_success(&mut p.output(), &generated)
}

fn java_flow<P: Prompt>(session: &Session, p: &mut P) -> Result<()> {
    let sources = generate::discover(&mut p.output(), session, Language::Java)?;
    let name = ask_name(
        p,
        "\nEnter project name",
        &session.default_target_name(Language::Java),
        Language::Java,
    )?;
    let main_class = p.ask_with_default("Main class", &name)?;
    let source_dirs = p.ask_with_default(
        "Source directories (space separated)",
        &infer_source_dirs(&sources).join(" "),
    )?;

    // Jars under lib/ are always on the classpath; extras come after them
    let jars = discovery::find_external_jars(&session.project_dir)?;
    if !jars.is_empty() {
        p.say(&format!("Found {} jar(s) in lib/: {}", jars.len(), jars.join(" ")))?;
    }
    let extra = p.ask_optional("Additional classpath entries (space separated)")?;
    let manifest = p.ask_optional("Manifest file")?;

    let base = BuildConfig::from_config(
        &session.config,
        Language::Java,
        session.config.default_architecture,
        &name,
    );
    let mut config = JavaBuildConfig::new(base);
    config.source_dirs = source_dirs.split_whitespace().map(str::to_string).collect();
    config.external_jars = jars;
    config.additional_classpath = extra
        .map(|e| e.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    config.main_class = Some(main_class);
    config.manifest_path = manifest;

    let generated = generate::generate_java_makefile(session, &config)?;
    generate::print_success(&mut p.output(), &generated)
}

fn new_project_flow<P: Prompt>(session: &mut Session, p: &mut P) -> Result<()> {
    p.say("\nThis will also be the default project name.")?;
    let default = session.config.default_project_dir.clone();
    let input = p.ask_with_default("Enter directory for project", &default)?;
    let language = choose_language(p)?;
    let target = new::start_project(session, &input, language)?;
    new::print_created(&mut p.output(), &target, language)
}

fn config_menu<P: Prompt>(session: &mut Session, p: &mut P) -> Result<()> {
    // Edits stay in the draft until "Save"
    let mut draft = session.config.clone();
    loop {
        p.header("Configuration Management")?;
        let labels = [
            format!("Default Architecture: {}", draft.default_architecture),
            format!("Default Project Directory: {}", draft.default_project_dir),
            format!("Preferred Build System: {}", draft.preferred_build_system),
            format!("Auto Create Directories: {}", draft.auto_create_directories),
            "Manage Compiler Flags".to_string(),
            "Save and Return to Main Menu".to_string(),
            "Cancel and Return to Main Menu (without saving)".to_string(),
            "Reset to Defaults".to_string(),
        ];
        let actions = [
            ConfigAction::Architecture,
            ConfigAction::ProjectDir,
            ConfigAction::BuildSystem,
            ConfigAction::AutoCreate,
            ConfigAction::CompilerFlags,
            ConfigAction::Save,
            ConfigAction::Cancel,
            ConfigAction::Reset,
        ];
        let options: Vec<(&str, ConfigAction)> =
            labels.iter().map(String::as_str).zip(actions).collect();

        match p.choose("Current Configuration:", &options, None)? {
            ConfigAction::Architecture => {
                draft.default_architecture = choose_architecture(p, draft.default_architecture)?
            }
            ConfigAction::ProjectDir => {
                draft.default_project_dir =
                    p.ask_with_default("Enter default project directory", &draft.default_project_dir)?;
            }
            ConfigAction::BuildSystem => {
                let systems = [("Make", BuildSystem::Make), ("CMake", BuildSystem::Cmake)];
                let current = systems
                    .iter()
                    .position(|(_, b)| *b == draft.preferred_build_system);
                draft.preferred_build_system =
                    p.choose("Select preferred build system:", &systems, current)?;
            }
            ConfigAction::AutoCreate => {
                draft.auto_create_directories = !draft.auto_create_directories
            }
            ConfigAction::CompilerFlags => compiler_flags_menu(&mut draft, p)?,
            ConfigAction::Save => {
                save_config(&session.config_path, &draft)?;
                session.config = draft;
                p.say(&format!(
                    "Configuration saved to {}",
                    session.config_path.display()
                ))?;
                return Ok(());
            }
            ConfigAction::Cancel => {
                p.say("Configuration changes cancelled. Returning to main menu.")?;
                return Ok(());
            }
            ConfigAction::Reset => {
                draft = Config::default();
                p.say("Configuration reset to defaults. Choose 6 to save.")?;
            }
        }
    }
}

fn compiler_flags_menu<P: Prompt>(draft: &mut Config, p: &mut P) -> Result<()> {
    loop {
        p.header("Compiler Flags Management")?;
        p.say("Current Compiler Flags:")?;
        for lang in Language::ALL {
            p.say(&format!("{}: {}", lang, draft.compiler_flags(lang)))?;
        }

        let labels: Vec<String> = Language::ALL
            .iter()
            .map(|lang| format!("Edit {} flags", lang))
            .collect();
        // `None` is the way back to the configuration menu
        let mut options: Vec<(&str, Option<Language>)> = labels
            .iter()
            .map(String::as_str)
            .zip(Language::ALL.iter().copied().map(Some))
            .collect();
        options.push(("Return to config menu", None));

        let Some(language) = p.choose("Select flags to edit:", &options, None)? else {
            return Ok(());
        };
        let current = draft.compiler_flags(language).to_string();
        let flags = p.ask_with_default(&format!("Enter {} flags", language), &current)?;
        draft.set_compiler_flags(language, &flags);
    }
}
