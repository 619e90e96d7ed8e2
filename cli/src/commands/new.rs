//! # buildgen New Project Command
//!
//! File: cli/src/commands/new.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `buildgen new` and menu option 5: creates a project directory
//! and fills it with a hello-world program for the chosen language plus a
//! `README.md`:
//!
//! - C: `main.c`, `main.h`
//! - C++: `main.cpp`, `main.hpp`
//! - Java: `<name>.java` (the class is named after the project)
//!
//! The name defaults to `default_project_dir` from the configuration. A name
//! with a path in front of it (`~/code/calc`) creates the project inside that
//! path; the last component must be a valid identifier. Missing parents are
//! only created when `auto_create_directories` is on. An existing project
//! directory is reused and files already in it are left untouched.
//!
//! ```bash
//! buildgen new calc --lang c
//! buildgen new ~/code/Greeter -l java
//! ```
//!
use crate::commands::Session;
use crate::common::fs::io;
use crate::core::error::{BuildgenError, Result};
use crate::core::model::Language;
use crate::core::templating;
use crate::generate::validate_identifier;
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Arguments for `buildgen new`.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Project directory name, optionally prefixed by a parent path.
    /// Defaults to the configured `default_project_dir`.
    pub name: Option<String>,

    /// Language of the sample sources.
    #[arg(long, short = 'l', value_enum)]
    pub lang: Language,
}

pub fn handle_new(args: NewArgs, session: &mut Session) -> Result<()> {
    let input = args
        .name
        .unwrap_or_else(|| session.config.default_project_dir.clone());
    let target = start_project(session, &input, args.lang)?;

    let stdout = std::io::stdout();
    print_created(&mut stdout.lock(), &target, args.lang)
}

/// Creates the project named by `input` and makes it the session's project
/// directory. Returns the new directory.
pub fn start_project(session: &mut Session, input: &str, language: Language) -> Result<PathBuf> {
    let (parent, name) = resolve_project_target(&session.project_dir, input)?;
    let target = create_project(
        &parent,
        &name,
        language,
        session.config.auto_create_directories,
    )?;
    session.project_dir = target.clone();
    Ok(target)
}

/// Splits `input` into the directory the project goes in and its name.
///
/// Relative parents are resolved against `base`; `~` is expanded.
pub fn resolve_project_target(base: &Path, input: &str) -> Result<(PathBuf, String)> {
    let expanded = shellexpand::tilde(input.trim()).into_owned();
    let path = Path::new(&expanded);
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!(BuildgenError::InvalidName(input.to_string())))?
        .to_string();
    // `calc` has the empty path as parent; treat it like no parent at all
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => base.join(p),
        _ => base.to_path_buf(),
    };
    Ok((parent, name))
}

/// Scaffolds `parent/name` for `language`.
pub fn create_project(
    parent: &Path,
    name: &str,
    language: Language,
    auto_create_directories: bool,
) -> Result<PathBuf> {
    validate_identifier(name, language)?;

    if !parent.exists() {
        if auto_create_directories {
            io::ensure_dir_exists(parent)?;
        } else {
            return Err(anyhow!(BuildgenError::FileSystem(format!(
                "Parent directory does not exist: {} (enable auto_create_directories to create it)",
                parent.display()
            ))));
        }
    }

    // Reusing an existing project directory is fine
    let target = parent.join(name);
    io::ensure_dir_exists(&target)
        .with_context(|| format!("Failed to create project directory {}", target.display()))?;

    let mut context = tera::Context::new();
    context.insert("project_name", name);
    context.insert("language", &language.to_string());
    context.insert("cli_language", &language.to_string().to_lowercase());
    context.insert(
        "current_date",
        &chrono::Local::now().format("%Y-%m-%d").to_string(),
    );

    for (file_name, template) in scaffold_files(language, name) {
        let path = target.join(&file_name);
        if path.exists() {
            // Never clobber user code
            warn!("Keeping existing file {}", path.display());
            continue;
        }
        let text = templating::render(template, &context)?;
        io::write_string_to_file(&path, &text)?;
    }

    info!("Created {} project at {}", language, target.display());
    Ok(target)
}

/// Files written for `language`, paired with the template producing each.
fn scaffold_files(language: Language, name: &str) -> Vec<(String, &'static str)> {
    let mut files: Vec<(String, &'static str)> = match language {
        Language::C => vec![templating::SCAFFOLD_MAIN_C, templating::SCAFFOLD_MAIN_H]
            .into_iter()
            .map(|t| (templating::output_file_name(t).to_string(), t))
            .collect(),
        Language::Cpp => vec![templating::SCAFFOLD_MAIN_CPP, templating::SCAFFOLD_MAIN_HPP]
            .into_iter()
            .map(|t| (templating::output_file_name(t).to_string(), t))
            .collect(),
        Language::Java => vec![(format!("{}.java", name), templating::SCAFFOLD_MAIN_JAVA)],
    };
    files.push((
        templating::output_file_name(templating::SCAFFOLD_README).to_string(),
        templating::SCAFFOLD_README,
    ));
    files
}

/// Reports the new project and how to continue from it.
pub fn print_created<W: Write>(out: &mut W, target: &Path, language: Language) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let shown = pathdiff::diff_paths(target, &cwd)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| target.to_path_buf());
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    writeln!(
        out,
        "\nNew {} project '{}' created successfully at {}",
        language,
        name,
        shown.display()
    )
    .context("Failed to write output")?;
    writeln!(out, "\nNext steps:").context("Failed to write output")?;
    writeln!(out, "  cd {}", shown.display()).context("Failed to write output")?;
    writeln!(
        out,
        "  buildgen makefile --lang {}",
        language.to_string().to_lowercase()
    )
    .context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::fs;
    use tempfile::tempdir;

    /// Tests the C scaffold and its README.
    #[test]
    fn test_create_c_project() -> Result<()> {
        let dir = tempdir()?;
        let target = create_project(dir.path(), "calc", Language::C, true)?;

        assert_eq!(target, dir.path().join("calc"));
        let main = fs::read_to_string(target.join("main.c"))?;
        assert!(main.contains("#include \"main.h\""));
        assert!(main.contains("Hello from calc!"));
        assert!(fs::read_to_string(target.join("main.h"))?.contains("#define MAIN_H"));

        let readme = fs::read_to_string(target.join("README.md"))?;
        assert!(readme.starts_with("# calc\n"));
        assert!(readme.contains("A new C project, created on "));
        assert!(readme.contains("buildgen makefile --lang c\n"));
        Ok(())
    }

    /// Tests that the Java class is named after the project.
    #[test]
    fn test_create_java_project_uses_name_for_class() -> Result<()> {
        let dir = tempdir()?;
        let target = create_project(dir.path(), "Greeter", Language::Java, true)?;

        let source = fs::read_to_string(target.join("Greeter.java"))?;
        assert!(source.starts_with("public class Greeter {"));
        assert!(!target.join("Main.java").exists());
        Ok(())
    }

    /// Tests the C++ scaffold files.
    #[test]
    fn test_create_cpp_project_files() -> Result<()> {
        let dir = tempdir()?;
        let target = create_project(dir.path(), "engine", Language::Cpp, true)?;

        assert!(target.join("main.cpp").is_file());
        assert!(target.join("main.hpp").is_file());
        assert!(fs::read_to_string(target.join("README.md"))?.contains("--lang c++"));
        Ok(())
    }

    /// Tests that invalid names create nothing.
    #[test]
    fn test_rejects_invalid_names() {
        let dir = tempdir().unwrap();
        assert!(create_project(dir.path(), "my-app", Language::C, true).is_err());
        assert!(create_project(dir.path(), "9Lives", Language::Java, true).is_err());
        assert!(!dir.path().join("my-app").exists());
    }

    /// Tests that missing parents are only created with auto-creation on.
    #[test]
    fn test_missing_parent_depends_on_auto_create() -> Result<()> {
        let dir = tempdir()?;
        let parent = dir.path().join("code/nested");

        assert!(create_project(&parent, "calc", Language::C, false).is_err());
        assert!(!parent.exists());

        let target = create_project(&parent, "calc", Language::C, true)?;
        assert!(target.join("main.c").is_file());
        Ok(())
    }

    /// Tests that files already in the directory are left alone.
    #[test]
    fn test_existing_files_are_kept() -> Result<()> {
        let dir = tempdir()?;
        let project = dir.path().join("calc");
        fs::create_dir(&project)?;
        fs::write(project.join("main.c"), "// mine")?;

        create_project(dir.path(), "calc", Language::C, false)?;

        assert_eq!(fs::read_to_string(project.join("main.c"))?, "// mine");
        assert!(project.join("main.h").is_file());
        Ok(())
    }

    /// Tests splitting the input into parent directory and name.
    #[test]
    fn test_resolve_project_target() -> Result<()> {
        let base = Path::new("/work");
        assert_eq!(
            resolve_project_target(base, "calc")?,
            (PathBuf::from("/work"), "calc".to_string())
        );
        assert_eq!(
            resolve_project_target(base, "apps/calc")?,
            (PathBuf::from("/work/apps"), "calc".to_string())
        );
        assert_eq!(
            resolve_project_target(base, "/opt/calc")?,
            (PathBuf::from("/opt"), "calc".to_string())
        );
        assert!(resolve_project_target(base, "/").is_err());
        Ok(())
    }

    /// Tests that the new project becomes the session's directory.
    #[test]
    fn test_start_project_switches_session() -> Result<()> {
        let dir = tempdir()?;
        let mut session = Session {
            config: Config::default(),
            config_path: dir.path().join("cfg.json"),
            project_dir: dir.path().to_path_buf(),
        };

        let target = start_project(&mut session, "calc", Language::C)?;

        assert_eq!(session.project_dir, target);
        assert_eq!(session.default_target_name(Language::C), "calc");
        Ok(())
    }
}
