//! Exclusion list loaded from an ignore file.
//!
//! Each non-comment line names a path, relative to the scan root, that the
//! scanner skips. Matching is exact: `node_modules` excludes the root-level
//! `node_modules` directory but not `docs/node_modules`.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::fs::FileSystem;

/// Set of relative paths to skip during scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions(HashSet<String>);

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse newline-separated patterns.
    ///
    /// Blank lines and any line containing `#` are dropped. One leading and
    /// one trailing `/` are stripped from each remaining pattern, so both
    /// `/dist` and `dist/` become `dist`. Interior separators are kept.
    pub fn parse(raw: &str) -> Self {
        raw.lines()
            .filter(|line| !line.is_empty() && !line.contains('#'))
            .map(|line| {
                let line = line.strip_prefix('/').unwrap_or(line);
                line.strip_suffix('/').unwrap_or(line)
            })
            .filter(|pattern| !pattern.is_empty())
            .collect()
    }

    /// Load patterns from `root/file_name`. A missing file yields an empty set.
    pub fn load(fs: &dyn FileSystem, root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        if !fs.exists(&path) {
            debug!(path = %path.display(), "no ignore file, nothing excluded");
            return Ok(Self::new());
        }
        let exclusions = Self::parse(&fs.read_text(&path)?);
        debug!(path = %path.display(), count = exclusions.len(), "loaded exclusions");
        Ok(exclusions)
    }

    /// True if `rel_path` exactly equals an exclusion fragment.
    pub fn contains(&self, rel_path: &str) -> bool {
        self.0.contains(rel_path)
    }

    pub fn insert(&mut self, fragment: impl Into<String>) {
        self.0.insert(fragment.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Exclusions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
