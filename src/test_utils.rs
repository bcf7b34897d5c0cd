//! Test utilities for creating temporary documentation trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::content::TITLE_SEPARATOR;

/// A temporary documentation tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDocs {
    dir: TempDir,
}

impl TestDocs {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with arbitrary content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a document whose first line carries `title`.
    pub fn add_doc(&self, path: &str, title: &str) -> PathBuf {
        self.add_file(path, &format!("#{}{}\n\nBody.\n", TITLE_SEPARATOR, title))
    }

    /// Create an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Read a file below the tree, if present.
    pub fn read(&self, path: &str) -> Option<String> {
        fs::read_to_string(self.dir.path().join(path)).ok()
    }
}

impl Default for TestDocs {
    fn default() -> Self {
        Self::new()
    }
}
