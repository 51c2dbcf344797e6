//! Executable lookup across a root directory, configured fallback
//! directories, and the process search path.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Fallback directories searched after the root, before `PATH`.
/// Relative entries are resolved against the root directory.
const DEFAULT_SEARCH_DIRS: &[&str] = &["vendor/bin", "node_modules/.bin"];

/// Resolves a logical program name to an executable path.
pub struct BinaryLocator {
    root_dir: PathBuf,
    search_dirs: Vec<String>,
}

impl BinaryLocator {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            search_dirs: DEFAULT_SEARCH_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Replace the fallback search directories. Entries may be absolute,
    /// `~`-prefixed, or relative to the root directory.
    pub fn with_search_dirs(mut self, dirs: &[&str]) -> Self {
        self.search_dirs = dirs.iter().map(|d| d.to_string()).collect();
        self
    }

    /// Find the first existing, executable match for `binary`.
    ///
    /// Search order: root directory, fallback search directories, then every
    /// entry of the process's `PATH`. When nothing matches, `quiet` selects
    /// between `Ok(None)` (probing for optional tools) and
    /// `Err(BinaryNotFound)`.
    pub fn find(&self, binary: &str, quiet: bool) -> Result<Option<PathBuf>> {
        let candidate = self.root_dir.join(binary);
        if is_executable(&candidate) {
            return Ok(Some(candidate));
        }

        for dir in &self.search_dirs {
            let expanded = shellexpand::tilde(dir);
            let mut dir_path = PathBuf::from(expanded.as_ref());
            if dir_path.is_relative() {
                dir_path = self.root_dir.join(dir_path);
            }
            let candidate = dir_path.join(binary);
            if is_executable(&candidate) {
                return Ok(Some(candidate));
            }
        }

        if let Some(path_var) = env::var_os("PATH") {
            for dir in env::split_paths(&path_var) {
                let candidate = dir.join(binary);
                if is_executable(&candidate) {
                    return Ok(Some(candidate));
                }
            }
        }

        if quiet {
            Ok(None)
        } else {
            Err(Error::BinaryNotFound(binary.to_string()))
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_executable(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        path
    }

    #[test]
    fn find_returns_path_in_root() {
        let dir = tempfile::tempdir().unwrap();
        let expected = write_executable(dir.path(), "mytool");

        let locator = BinaryLocator::new(dir.path());
        let found = locator.find("mytool", false).unwrap();
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn find_searches_fallback_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let tools = dir.path().join("tools");
        fs::create_dir(&tools).unwrap();
        let expected = write_executable(&tools, "linter");

        let locator = BinaryLocator::new(dir.path()).with_search_dirs(&["tools"]);
        let found = locator.find("linter", false).unwrap();
        assert_eq!(found, Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn find_falls_back_to_process_path() {
        let dir = tempfile::tempdir().unwrap();
        let locator = BinaryLocator::new(dir.path());
        let found = locator.find("sh", false).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn find_errors_when_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let locator = BinaryLocator::new(dir.path()).with_search_dirs(&[]);

        let err = locator.find("WorldWidePeace", false).unwrap_err();
        assert_eq!(err.code(), "BINARY_NOT_FOUND");
        assert!(err.to_string().contains("WorldWidePeace"));
    }

    #[test]
    fn find_quiet_returns_none_when_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let locator = BinaryLocator::new(dir.path()).with_search_dirs(&[]);

        let found = locator.find("WorldWidePeace", true).unwrap();
        assert!(found.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn find_skips_non_executable_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "data").unwrap();

        let locator = BinaryLocator::new(dir.path()).with_search_dirs(&[]);
        let found = locator.find("notes.txt", true).unwrap();
        assert!(found.is_none());
    }
}
