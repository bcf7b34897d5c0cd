//! Filesystem access used by the scanner, mapper and writer.
//!
//! Everything that touches the disk goes through [`FileSystem`], so the
//! pipeline can run against [`OsFileSystem`] in the binary and against an
//! in-memory tree in tests.

use std::path::Path;

use tracing::warn;

use crate::error::{Result, TocError};

/// The narrow filesystem surface the generator depends on.
///
/// Implementations must be `Sync` because rendered documents may be written
/// from several worker threads at once.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate children of a directory, in listing order.
    fn list_children(&self, path: &Path) -> Result<Vec<String>>;

    /// True for real directories. Symlinks are not followed.
    fn is_dir(&self, path: &Path) -> bool;

    fn read_text(&self, path: &Path) -> Result<String>;

    fn write_text(&self, path: &Path, data: &str) -> Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_children(&self, path: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| TocError::io(path, e))? {
            let entry = entry.map_err(|e| TocError::io(path, e))?;
            // Non-UTF-8 names cannot round-trip through `/`-joined relative paths
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    warn!(dir = %path.display(), name = ?raw, "skipping non-UTF-8 file name");
                }
            }
        }
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        // lstat semantics: a symlink to a directory is not descended into
        path.symlink_metadata()
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    /// Invalid UTF-8 is replaced rather than rejected; binary candidates such
    /// as `logo.md.gz` simply yield no title.
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| TocError::io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_text(&self, path: &Path, data: &str) -> Result<()> {
        std::fs::write(path, data).map_err(|e| TocError::io(path, e))
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryFileSystem;

#[cfg(any(test, feature = "test-utils"))]
mod memory {
    use std::collections::{BTreeMap, BTreeSet};
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::{PoisonError, RwLock};

    use super::FileSystem;
    use crate::error::{Result, TocError};

    /// In-memory [`FileSystem`] for tests.
    ///
    /// Directories are implied by the files stored below them; empty
    /// directories can be created explicitly with [`MemoryFileSystem::with_dir`].
    #[derive(Debug, Default)]
    pub struct MemoryFileSystem {
        files: RwLock<BTreeMap<PathBuf, String>>,
        dirs: RwLock<BTreeSet<PathBuf>>,
    }

    impl MemoryFileSystem {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a file with the given content.
        #[must_use]
        pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
            self.files
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(path.into(), content.into());
            self
        }

        /// Add an (otherwise empty) directory.
        #[must_use]
        pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
            self.dirs
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(path.into());
            self
        }

        /// Content of a file, if present.
        pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(path.as_ref())
                .cloned()
        }

        /// All stored file paths, sorted.
        pub fn file_paths(&self) -> Vec<PathBuf> {
            self.files
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .keys()
                .cloned()
                .collect()
        }

        fn is_file(&self, path: &Path) -> bool {
            self.files
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(path)
        }

        /// Every known path that lies strictly below `dir`.
        fn descendants(&self, dir: &Path) -> Vec<PathBuf> {
            let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
            let dirs = self.dirs.read().unwrap_or_else(PoisonError::into_inner);
            files
                .keys()
                .chain(dirs.iter())
                .filter(|p| p.as_path() != dir && p.starts_with(dir))
                .cloned()
                .collect()
        }
    }

    impl FileSystem for MemoryFileSystem {
        fn exists(&self, path: &Path) -> bool {
            self.is_file(path) || self.is_dir(path)
        }

        fn list_children(&self, path: &Path) -> Result<Vec<String>> {
            if !self.is_dir(path) {
                return Err(TocError::io(
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "no such directory"),
                ));
            }
            let names: BTreeSet<String> = self
                .descendants(path)
                .iter()
                .filter_map(|p| p.strip_prefix(path).ok())
                .filter_map(|rel| rel.components().next())
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            Ok(names.into_iter().collect())
        }

        fn is_dir(&self, path: &Path) -> bool {
            if self.is_file(path) {
                return false;
            }
            self.dirs
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(path)
                || !self.descendants(path).is_empty()
        }

        fn read_text(&self, path: &Path) -> Result<String> {
            self.file(path).ok_or_else(|| {
                TocError::io(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
            })
        }

        fn write_text(&self, path: &Path, data: &str) -> Result<()> {
            self.files
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(path.to_path_buf(), data.to_string());
            Ok(())
        }
    }
}
