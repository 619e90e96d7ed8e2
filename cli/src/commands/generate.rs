//! # buildgen Generate Commands
//!
//! File: cli/src/commands/generate.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements the build file commands shared by the CLI and the menu:
//!
//! - `buildgen makefile`: traditional Makefile (menu option 2)
//! - `buildgen cmake`: `CMakeLists.txt` (menu option 3)
//! - `buildgen generate`: whichever of the two `preferred_build_system` names
//! - `buildgen java-makefile`: advanced Java Makefile (menu option 4)
//!
//! ## Flow
//!
//! 1. Discover sources of the selected language in the project directory.
//! 2. Resolve the target name (validated, or derived from the directory name)
//!    and the architecture (flag, or the configured default).
//! 3. Render and write the artifact, overwriting any previous one.
//! 4. With `auto_create_directories` on, create the output directory the
//!    generated Makefile compiles into (`obj/`, or `build/` for Java).
//! 5. Print a success message with the next build steps.
//!
//! An empty discovery result is reported but does not stop generation; the
//! generated files pick up sources added later.
//!
//! ```bash
//! buildgen makefile --lang c --name demo --arch 32
//! buildgen -C ~/src/engine cmake -l c++
//! buildgen java-makefile --main-class com.example.Main --jar lib/gson.jar
//! ```
//!
use crate::commands::Session;
use crate::common::fs::discovery::{self, SourceFileSet};
use crate::common::fs::io;
use crate::core::error::Result;
use crate::core::model::{Architecture, BuildSystem, Language};
use crate::generate::{
    cmake, java, makefile, validate_identifier, write_artifact, Artifact, BuildConfig,
    JavaBuildConfig,
};
use anyhow::Context;
use clap::{Args, Parser};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Target selection shared by `makefile`, `cmake` and `generate`.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Source language of the project.
    #[arg(long, short = 'l', value_enum)]
    pub lang: Language,

    /// Name of the binary (defaults to the project directory's name).
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Target architecture (defaults to the configured one).
    #[arg(long, short = 'a', value_enum)]
    pub arch: Option<Architecture>,
}

/// Arguments for `buildgen makefile` and `buildgen generate`.
#[derive(Parser, Debug)]
pub struct MakefileArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Arguments for `buildgen cmake`.
#[derive(Parser, Debug)]
pub struct CmakeArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// List only the language's entry file (`main.c`, `main.cpp`) instead of
    /// the discovered sources.
    #[arg(long)]
    pub no_discover: bool,
}

/// Arguments for `buildgen java-makefile`.
#[derive(Parser, Debug)]
pub struct JavaMakefileArgs {
    /// Project (and jar) name; defaults to the project directory's name.
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Fully qualified entry class; defaults to the project name.
    #[arg(long)]
    pub main_class: Option<String>,

    /// Source directory. Repeatable; defaults to the discovered top-level
    /// directories, or `src`.
    #[arg(long = "src-dir", action = clap::ArgAction::Append)]
    pub source_dirs: Vec<String>,

    /// Jar put on the classpath. Repeatable; defaults to the jars under `lib/`.
    #[arg(long = "jar", action = clap::ArgAction::Append)]
    pub jars: Vec<String>,

    /// Extra classpath entry appended after the jars. Repeatable.
    #[arg(long = "classpath", action = clap::ArgAction::Append)]
    pub classpath: Vec<String>,

    /// Manifest file copied into the jar instead of a generated one.
    #[arg(long)]
    pub manifest: Option<String>,
}

/// Outcome of one generation, used for the success message.
#[derive(Debug, Clone)]
pub struct Generated {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub build: BuildConfig,
}

pub fn handle_makefile(args: MakefileArgs, session: &Session) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let sources = discover(&mut out, session, args.target.lang)?;
    let build = resolve_target(
        session,
        args.target.lang,
        args.target.name.as_deref(),
        args.target.arch,
    )?;
    let generated = generate_makefile(session, &build, &sources)?;
    print_success(&mut out, &generated)
}

pub fn handle_cmake(args: CmakeArgs, session: &Session) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // Without discovery the CMake file lists the language's entry file
    let sources = if args.no_discover {
        None
    } else {
        Some(discover(&mut out, session, args.target.lang)?)
    };
    let build = resolve_target(
        session,
        args.target.lang,
        args.target.name.as_deref(),
        args.target.arch,
    )?;
    let generated = generate_cmake(session, &build, sources.as_ref())?;
    print_success(&mut out, &generated)
}

/// Generates whichever build file the configuration prefers.
pub fn handle_generate(args: MakefileArgs, session: &Session) -> Result<()> {
    info!(
        "Preferred build system: {}",
        session.config.preferred_build_system
    );
    match session.config.preferred_build_system {
        BuildSystem::Make => handle_makefile(args, session),
        BuildSystem::Cmake => handle_cmake(
            CmakeArgs {
                target: args.target,
                no_discover: false,
            },
            session,
        ),
    }
}

pub fn handle_java_makefile(args: JavaMakefileArgs, session: &Session) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let base = resolve_target(session, Language::Java, args.name.as_deref(), None)?;

    let mut config = JavaBuildConfig::new(base);
    // Explicit flags win; otherwise look at what is on disk
    config.source_dirs = if args.source_dirs.is_empty() {
        let sources = discover(&mut out, session, Language::Java)?;
        java::infer_source_dirs(&sources)
    } else {
        args.source_dirs
    };
    config.external_jars = if args.jars.is_empty() {
        discovery::find_external_jars(&session.project_dir)?
    } else {
        args.jars
    };
    config.additional_classpath = args.classpath;
    config.main_class = args.main_class;
    config.manifest_path = args.manifest;

    let generated = generate_java_makefile(session, &config)?;
    print_success(&mut out, &generated)
}

/// Runs discovery and tells the user when nothing was found.
pub fn discover<W: Write>(out: &mut W, session: &Session, language: Language) -> Result<SourceFileSet> {
    let sources = discovery::discover_sources(&session.project_dir, language)?;
    if sources.sources().next().is_none() {
        warn!(
            "No {} source files found in {}",
            language,
            session.project_dir.display()
        );
        writeln!(
            out,
            "Note: no {} source files found in {}. Generating anyway.",
            language,
            session.project_dir.display()
        )
        .context("Failed to write output")?;
    }
    Ok(sources)
}

/// Builds the project description from an optional user-supplied name and
/// architecture, falling back to the directory name and configured default.
pub fn resolve_target(
    session: &Session,
    language: Language,
    name: Option<&str>,
    arch: Option<Architecture>,
) -> Result<BuildConfig> {
    let name = match name {
        // A typed name is rejected rather than fixed up
        Some(n) => {
            validate_identifier(n, language)?;
            n.to_string()
        }
        None => session.default_target_name(language),
    };
    let arch = arch.unwrap_or(session.config.default_architecture);
    Ok(BuildConfig::from_config(&session.config, language, arch, &name))
}

pub fn generate_makefile(
    session: &Session,
    build: &BuildConfig,
    sources: &SourceFileSet,
) -> Result<Generated> {
    let text = makefile::render_makefile(build, sources)?;
    let path = write_artifact(&session.project_dir, Artifact::Makefile, &text)?;
    create_output_dir(session, build.language)?;
    info!("Makefile written to {}", path.display());
    Ok(Generated {
        artifact: Artifact::Makefile,
        path,
        build: build.clone(),
    })
}

pub fn generate_cmake(
    session: &Session,
    build: &BuildConfig,
    sources: Option<&SourceFileSet>,
) -> Result<Generated> {
    let text = cmake::render_cmake(build, sources)?;
    let path = write_artifact(&session.project_dir, Artifact::CMakeLists, &text)?;
    // CMake builds out of tree, so no obj/ here
    info!("CMakeLists.txt written to {}", path.display());
    Ok(Generated {
        artifact: Artifact::CMakeLists,
        path,
        build: build.clone(),
    })
}

pub fn generate_java_makefile(session: &Session, config: &JavaBuildConfig) -> Result<Generated> {
    let text = java::render_java_makefile(config)?;
    let path = write_artifact(&session.project_dir, Artifact::JavaMakefile, &text)?;
    create_output_dir(session, Language::Java)?;
    info!("Java Makefile written to {}", path.display());
    Ok(Generated {
        artifact: Artifact::JavaMakefile,
        path,
        build: config.base.clone(),
    })
}

fn create_output_dir(session: &Session, language: Language) -> Result<()> {
    if !session.config.auto_create_directories {
        return Ok(());
    }
    // Where the generated Makefiles put their output
    let name = if language == Language::Java { "build" } else { "obj" };
    io::ensure_dir_exists(&session.project_dir.join(name))
}

/// Prints the success message and the commands that build the result.
pub fn print_success<W: Write>(out: &mut W, generated: &Generated) -> Result<()> {
    let build = &generated.build;
    let mut lines = vec![
        "\nSuccess! Build files generated successfully.".to_string(),
        format!("Wrote: {}", generated.path.display()),
        format!("Target name: {}", build.project_name),
        format!("Language: {}", build.language),
    ];
    if build.language != Language::Java {
        lines.push(format!("Architecture: {}", build.architecture.label()));
    }

    // CMake first, then the advanced Java Makefile, then the simple ones
    match (generated.artifact.build_system(), generated.artifact, build.language) {
        (BuildSystem::Cmake, _, language) => {
            lines.push("\nTo build with CMake:".to_string());
            lines.extend(
                ["1. mkdir build", "2. cd build", "3. cmake ..", "4. make"].map(String::from),
            );
            if language == Language::Java {
                lines.push(format!("5. java -jar {}.jar", build.project_name));
            }
        }
        (_, Artifact::JavaMakefile, _) => {
            lines.push("\nTo build with Make:".to_string());
            lines.push("1. make".to_string());
            lines.push("\nTo run:".to_string());
            lines.push("2. make run (or make run-jar)".to_string());
            lines.push("\nOther targets:".to_string());
            lines.push("make help".to_string());
        }
        (_, _, Language::Java) => {
            lines.push("\nTo build with Make:".to_string());
            lines.push("1. make".to_string());
            lines.push("\nTo run:".to_string());
            lines.push("2. make run".to_string());
            lines.push("\nTo clean:".to_string());
            lines.push("make clean".to_string());
        }
        _ => {
            lines.push("\nTo build with Make:".to_string());
            lines.push("1. make".to_string());
            lines.push("\nTo clean (and rebuild after header changes):".to_string());
            lines.push("make clean".to_string());
        }
    }

    for line in lines {
        writeln!(out, "{}", line).context("Failed to write output")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn session(auto_create: bool) -> (TempDir, Session) {
        let dir = tempdir().unwrap();
        let project = dir.path().join("demo");
        fs::create_dir(&project).unwrap();
        let mut config = Config::default();
        config.auto_create_directories = auto_create;
        let session = Session {
            config,
            config_path: dir.path().join("buildgen_config.json"),
            project_dir: project,
        };
        (dir, session)
    }

    /// Tests that generating a Makefile writes it and creates `obj/`.
    #[test]
    fn test_generate_makefile_writes_and_creates_obj() -> Result<()> {
        let (_dir, session) = session(true);
        fs::write(session.project_dir.join("main.c"), "int main(void){return 0;}")?;

        let mut out = Vec::new();
        let sources = discover(&mut out, &session, Language::C)?;
        let build = resolve_target(&session, Language::C, None, None)?;
        let generated = generate_makefile(&session, &build, &sources)?;

        assert!(out.is_empty());
        assert_eq!(generated.path, session.project_dir.join("Makefile"));
        let text = fs::read_to_string(&generated.path)?;
        assert!(text.contains("demo: $(OBJ)"));
        assert!(text.contains("CFLAGS = -Wall -Wextra -O2 -I. -m64"));
        assert!(session.project_dir.join("obj").is_dir());
        Ok(())
    }

    /// Tests that no output directory appears when auto-creation is off.
    #[test]
    fn test_auto_create_off_skips_output_dir() -> Result<()> {
        let (_dir, session) = session(false);
        let sources = SourceFileSet::new(Language::Java, ["demo.java"]);
        let build = resolve_target(&session, Language::Java, Some("demo"), None)?;

        generate_makefile(&session, &build, &sources)?;

        assert!(session.project_dir.join("Makefile").is_file());
        assert!(!session.project_dir.join("build").exists());
        Ok(())
    }

    /// Tests the note printed when nothing was discovered.
    #[test]
    fn test_empty_discovery_is_reported() -> Result<()> {
        let (_dir, session) = session(true);
        let mut out = Vec::new();

        let sources = discover(&mut out, &session, Language::Cpp)?;

        assert!(sources.is_empty());
        assert!(String::from_utf8(out)?.contains("no C++ source files found"));
        Ok(())
    }

    /// Tests name validation and the fallbacks for name and architecture.
    #[test]
    fn test_resolve_target_validates_and_defaults() -> Result<()> {
        let (_dir, mut session) = session(true);
        session.config.default_architecture = Architecture::Native;

        let build = resolve_target(&session, Language::Cpp, None, None)?;
        assert_eq!(build.project_name, "demo");
        assert_eq!(build.architecture, Architecture::Native);

        let build = resolve_target(&session, Language::C, Some("calc"), Some(Architecture::X32))?;
        assert_eq!(build.project_name, "calc");
        assert_eq!(build.architecture, Architecture::X32);

        assert!(resolve_target(&session, Language::C, Some("bad name"), None).is_err());
        assert!(resolve_target(&session, Language::C, Some("clean"), None).is_err());
        Ok(())
    }

    /// Tests that a project directory named `2048` still yields a valid Java
    /// main class.
    #[test]
    fn test_numeric_directory_gives_valid_java_class() -> Result<()> {
        let dir = tempdir()?;
        let project = dir.path().join("2048");
        fs::create_dir(&project)?;
        let session = Session {
            config: Config::default(),
            config_path: dir.path().join("buildgen_config.json"),
            project_dir: project,
        };

        let base = resolve_target(&session, Language::Java, None, None)?;
        assert_eq!(base.project_name, "_2048");

        let generated = generate_java_makefile(&session, &JavaBuildConfig::new(base))?;
        let text = fs::read_to_string(&generated.path)?;
        assert!(text.contains("MAIN_CLASS = _2048\n"));
        assert!(!text.contains("= 2048"));
        Ok(())
    }

    /// Tests CMake generation and the next-steps message.
    #[test]
    fn test_generate_cmake_and_success_message() -> Result<()> {
        let (_dir, session) = session(true);
        let build = resolve_target(&session, Language::Cpp, Some("app"), Some(Architecture::X32))?;

        let generated = generate_cmake(&session, &build, None)?;
        let text = fs::read_to_string(session.project_dir.join("CMakeLists.txt"))?;
        assert!(text.contains("set(CMAKE_CXX_STANDARD 17)"));
        assert!(text.contains("-m32"));
        assert!(!session.project_dir.join("obj").exists());

        let mut out = Vec::new();
        print_success(&mut out, &generated)?;
        let message = String::from_utf8(out)?;
        assert!(message.contains("Target name: app"));
        assert!(message.contains("Architecture: 32-bit"));
        assert!(message.contains("3. cmake .."));
        Ok(())
    }

    /// Tests the advanced Java Makefile and its success message.
    #[test]
    fn test_generate_java_makefile() -> Result<()> {
        let (_dir, session) = session(true);
        let base = resolve_target(&session, Language::Java, Some("demo"), None)?;
        let mut config = JavaBuildConfig::new(base);
        config.main_class = Some("com.example.Main".to_string());

        let generated = generate_java_makefile(&session, &config)?;

        let text = fs::read_to_string(&generated.path)?;
        assert!(text.contains("echo \"Main-Class: com.example.Main\" > $(MANIFEST)"));
        assert!(session.project_dir.join("build").is_dir());

        let mut out = Vec::new();
        print_success(&mut out, &generated)?;
        let message = String::from_utf8(out)?;
        assert!(message.contains("make run-jar"));
        assert!(!message.contains("Architecture:"));
        Ok(())
    }

    /// Tests that repeated `--src-dir`/`--jar` flags accumulate.
    #[test]
    fn test_parses_java_makefile_args() {
        let args = JavaMakefileArgs::try_parse_from([
            "java-makefile",
            "--src-dir",
            "src",
            "--src-dir",
            "gen",
            "--jar",
            "lib/a.jar",
            "--manifest",
            "MANIFEST.MF",
        ])
        .unwrap();
        assert_eq!(args.source_dirs, vec!["src", "gen"]);
        assert_eq!(args.jars, vec!["lib/a.jar"]);
        assert_eq!(args.manifest.as_deref(), Some("MANIFEST.MF"));
        assert!(args.main_class.is_none());
    }
}
