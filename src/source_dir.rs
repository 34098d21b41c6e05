//! Source directory access
//!
//! Reads Cinder sources as ordered lines from one root directory. Failures never abort the process: they are
//! logged through `tracing` and surface as empty results, so callers decide whether "nothing" is an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_MAX_SOURCE_SIZE, FrontendConfig};

/// File extension of Cinder sources.
pub const SOURCE_EXTENSION: &str = "cnd";

/// A directory of source files.
#[derive(Debug, Clone)]
pub struct SourceDir {
    root: PathBuf,
    max_source_size: u64,
}

impl SourceDir {
    /// Open `root`. A missing directory is logged but not fatal; every read from it will come back empty.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if !root.is_dir() {
            tracing::warn!(dir = %root.display(), "source directory does not exist");
        }
        Self {
            root,
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(&config.source_dir).with_max_source_size(config.max_source_size)
    }

    pub fn with_max_source_size(mut self, bytes: u64) -> Self {
        self.max_source_size = bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of `name` inside this directory.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Return `true` if `name` is an existing regular file.
    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    /// Read `name` as ordered lines without terminators.
    ///
    /// Returns an empty vector (after logging an error) if the file cannot be opened, is not UTF-8, or is larger
    /// than the configured maximum.
    pub fn read_lines(&self, name: &str) -> Vec<String> {
        let path = self.path_of(name);

        match fs::metadata(&path) {
            Ok(meta) if meta.len() > self.max_source_size => {
                tracing::error!(
                    path = %path.display(),
                    size = meta.len(),
                    limit = self.max_source_size,
                    "source file is too large"
                );
                return Vec::new();
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "could not open source file");
                return Vec::new();
            }
        }

        match fs::read_to_string(&path) {
            Ok(text) => {
                let lines: Vec<String> = text.lines().map(str::to_string).collect();
                tracing::debug!(path = %path.display(), lines = lines.len(), "read source file");
                lines
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "could not read source file");
                Vec::new()
            }
        }
    }

    /// Names of the regular files directly inside the directory, sorted.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(dir = %self.root.display(), error = %e, "could not list source directory");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    /// Like [`SourceDir::list`], restricted to `.cnd` files.
    pub fn list_sources(&self) -> Vec<String> {
        self.list()
            .into_iter()
            .filter(|name| Path::new(name).extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh, empty scratch directory unique to this process and test.
    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cinder_source_dir_{}_{}", std::process::id(), test));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let dir = scratch_dir("read_lines");
        fs::write(dir.join("main.cnd"), "float main() {\r\n  return 1;\n}\n").unwrap();

        let src = SourceDir::new(&dir);
        assert!(src.exists("main.cnd"));
        assert_eq!(src.read_lines("main.cnd"), vec!["float main() {", "  return 1;", "}"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = scratch_dir("missing_file");
        let src = SourceDir::new(&dir);
        assert!(!src.exists("nope.cnd"));
        assert!(src.read_lines("nope.cnd").is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory_is_not_fatal() {
        let src = SourceDir::new("/definitely/not/a/cinder/dir");
        assert!(src.list().is_empty());
        assert!(src.read_lines("main.cnd").is_empty());
    }

    #[test]
    fn test_oversized_file_reads_empty() {
        let dir = scratch_dir("oversized");
        fs::write(dir.join("big.cnd"), "void f() { }\n".repeat(10)).unwrap();

        let src = SourceDir::new(&dir).with_max_source_size(16);
        assert!(src.exists("big.cnd"));
        assert!(src.read_lines("big.cnd").is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_is_sorted_and_skips_directories() {
        let dir = scratch_dir("list");
        fs::write(dir.join("b.cnd"), "").unwrap();
        fs::write(dir.join("a.cnd"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::create_dir_all(dir.join("sub")).unwrap();

        let src = SourceDir::new(&dir);
        assert_eq!(src.list(), vec!["a.cnd", "b.cnd", "notes.txt"]);
        assert_eq!(src.list_sources(), vec!["a.cnd", "b.cnd"]);

        let _ = fs::remove_dir_all(&dir);
    }
}
