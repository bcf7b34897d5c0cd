//! Error types for TOC generation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can terminate a generation run.
///
/// A missing start directory and a malformed title line are not errors;
/// only filesystem failures and preview serialization surface here.
#[derive(Debug, Error)]
pub enum TocError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize documents: {0}")]
    Json(#[from] serde_json::Error),
}

impl TocError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = TocError::io(
            "docs/a.md",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "docs/a.md: denied");
    }
}
