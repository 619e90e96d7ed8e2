//! # buildgen Source Discovery
//!
//! File: cli/src/common/fs/discovery.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Finds the source files of a project. The tree under the project root is
//! walked recursively with `walkdir`; directories named exactly `obj` or
//! `build` (the output directories of the generated build files) are pruned at
//! any depth, and every file whose extension belongs to the selected language
//! is collected.
//!
//! ## Architecture
//!
//! - Paths are returned relative to the root, `/`-separated, sorted
//!   lexicographically and free of duplicates, so generated files are
//!   reproducible.
//! - An empty result is not an error. Callers print a "no files found" note.
//! - A root that cannot be read is an error. Unreadable entries further down
//!   are logged and skipped.
//!
//! ## Usage
//!
//! ```rust
//! let files = discovery::discover_sources(project_dir, Language::Cpp)?;
//! for header in files.headers() {
//!     println!("{}", header);
//! }
//! ```
//!
use crate::core::error::{BuildgenError, Result};
use crate::core::model::Language;
use anyhow::anyhow;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
pub const EXCLUDED_DIRS: [&str; 2] = ["obj", "build"];

/// Directory scanned for external jars, relative to the project root.
pub const LIB_DIR: &str = "lib";

/// The files discovered for one language, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileSet {
    language: Language,
    files: Vec<String>,
}

impl SourceFileSet {
    /// Builds a set from arbitrary paths, sorting and de-duplicating them.
    pub fn new<I, S>(language: Language, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let files: BTreeSet<String> = files.into_iter().map(Into::into).collect();
        SourceFileSet {
            language,
            files: files.into_iter().collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Every discovered file, sources and headers alike.
    #[cfg(test)]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Files compiled on their own (`.c`, `.cpp`, `.cc`, `.java`).
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(move |f| extension_of(f).is_some_and(|e| self.language.is_source_extension(e)))
    }

    /// Header files (`.h`, `.hpp`). Always empty for Java.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(move |f| !extension_of(f).is_some_and(|e| self.language.is_source_extension(e)))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Directories (with trailing `/`, `""` for the root) holding compile units.
    pub fn source_dirs(&self) -> Vec<String> {
        let dirs: BTreeSet<String> = self
            .sources()
            .map(|f| match f.rfind('/') {
                Some(idx) => f[..=idx].to_string(),
                None => String::new(),
            })
            .collect();
        dirs.into_iter().collect()
    }

    /// First path segment of every compile unit.
    ///
    /// A compile unit at the root makes the root itself the only entry
    /// (`"."`), since it already contains every subdirectory.
    pub fn top_level_dirs(&self) -> Vec<String> {
        let mut dirs = BTreeSet::new();
        for file in self.sources() {
            match file.split_once('/') {
                Some((first, _)) => {
                    dirs.insert(first.to_string());
                }
                None => return vec![".".to_string()],
            }
        }
        dirs.into_iter().collect()
    }
}

fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        None
    } else {
        Some(ext)
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && EXCLUDED_DIRS
            .iter()
            .any(|excluded| entry.file_name() == *excluded)
}

/// `/`-joined form of `path` relative to `root`.
fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Walks `start` and returns the files accepted by `wanted`, relative to `root`.
fn collect_files(root: &Path, start: &Path, wanted: impl Fn(&str) -> bool) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry_result in WalkDir::new(start).into_iter().filter_entry(|e| !is_excluded_dir(e)) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(anyhow!(BuildgenError::Discovery { source: e }));
            }
            Err(e) => {
                warn!("Skipping unreadable entry under '{}': {}", start.display(), e);
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        let Some(relative) = relative_slash_path(root, entry.path()) else {
            warn!("Could not relativize '{}'", entry.path().display());
            continue;
        };
        if extension_of(&relative).is_some_and(&wanted) {
            debug!("Discovered {}", relative);
            files.push(relative);
        }
    }
    Ok(files)
}

/// Discovers the files of `language` under `root`.
pub fn discover_sources(root: &Path, language: Language) -> Result<SourceFileSet> {
    if !root.is_dir() {
        anyhow::bail!(BuildgenError::FileSystem(format!(
            "Project directory not found: {}",
            root.display()
        )));
    }
    let extensions = language.extensions();
    let files = collect_files(root, root, |ext| extensions.contains(&ext))?;
    let set = SourceFileSet::new(language, files);
    debug!(
        "Discovered {} {} file(s) under {}",
        set.len(),
        language,
        root.display()
    );
    Ok(set)
}

/// Jar files under `root/lib`, as `lib/...` paths. Missing `lib/` yields none.
pub fn find_external_jars(root: &Path) -> Result<Vec<String>> {
    let lib_dir = root.join(LIB_DIR);
    if !lib_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut jars = collect_files(root, &lib_dir, |ext| ext == "jar")?;
    jars.sort();
    jars.dedup();
    Ok(jars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn sample_tree(root: &Path) {
        for f in [
            "main.c",
            "util.h",
            "main.cpp",
            "engine.cc",
            "engine.hpp",
            "src/a.c",
            "obj/stale.c",
            "build/generated.c",
            "src/obj/deep.c",
            "src/build/deep.h",
            "nested/objects/kept.c",
            "lib/Build/case.c",
            "notes.txt",
            "Makefile",
        ] {
            touch(root, f);
        }
    }

    /// Tests that `obj`/`build` are pruned at any depth and results are sorted.
    #[test]
    fn test_discover_c_excludes_build_dirs_and_sorts() -> Result<()> {
        let dir = tempdir()?;
        sample_tree(dir.path());

        let set = discover_sources(dir.path(), Language::C)?;

        assert_eq!(
            set.files(),
            &[
                "lib/Build/case.c",
                "main.c",
                "nested/objects/kept.c",
                "src/a.c",
                "util.h"
            ]
        );
        assert!(set
            .files()
            .iter()
            .all(|f| !f.split('/').any(|seg| seg == "obj" || seg == "build")));
        Ok(())
    }

    /// Tests that `.h` counts as a C++ header.
    #[test]
    fn test_discover_cpp_shares_h_headers() -> Result<()> {
        let dir = tempdir()?;
        sample_tree(dir.path());

        let set = discover_sources(dir.path(), Language::Cpp)?;

        assert_eq!(set.sources().collect::<Vec<_>>(), vec!["engine.cc", "main.cpp"]);
        assert_eq!(set.headers().collect::<Vec<_>>(), vec!["engine.hpp", "util.h"]);
        Ok(())
    }

    /// Tests that finding nothing is an empty set, not an error.
    #[test]
    fn test_discover_java_empty_is_not_an_error() -> Result<()> {
        let dir = tempdir()?;
        sample_tree(dir.path());

        let set = discover_sources(dir.path(), Language::Java)?;

        assert!(set.is_empty());
        assert_eq!(set.headers().count(), 0);
        Ok(())
    }

    /// Tests that only directories below the root are excluded.
    #[test]
    fn test_root_named_build_is_still_walked() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("build");
        touch(&root, "main.c");

        let set = discover_sources(&root, Language::C)?;

        assert_eq!(set.files(), &["main.c"]);
        Ok(())
    }

    /// Tests that a missing project directory fails discovery.
    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let result = discover_sources(&dir.path().join("nope"), Language::C);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Project directory not found"));
    }

    /// Tests the directory views, including a root file absorbing the
    /// subdirectories.
    #[test]
    fn test_source_and_top_level_dirs() {
        let set = SourceFileSet::new(
            Language::Java,
            ["src/com/example/Main.java", "test/FooTest.java", "Tool.java", "src/com/example/Main.java"],
        );
        assert_eq!(set.len(), 3);
        assert_eq!(set.top_level_dirs(), vec!["."]);
        assert_eq!(set.source_dirs(), vec!["", "src/com/example/", "test/"]);

        let nested = SourceFileSet::new(
            Language::Java,
            ["test/FooTest.java", "src/com/example/Main.java"],
        );
        assert_eq!(nested.top_level_dirs(), vec!["src", "test"]);
    }

    /// Tests jar lookup under `lib/`, recursive and sorted.
    #[test]
    fn test_find_external_jars() -> Result<()> {
        let dir = tempdir()?;
        assert!(find_external_jars(dir.path())?.is_empty());

        touch(dir.path(), "lib/gson.jar");
        touch(dir.path(), "lib/extra/junit.jar");
        touch(dir.path(), "lib/readme.txt");

        assert_eq!(
            find_external_jars(dir.path())?,
            vec!["lib/extra/junit.jar", "lib/gson.jar"]
        );
        Ok(())
    }
}
