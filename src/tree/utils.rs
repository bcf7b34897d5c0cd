//! Shared utility functions for tree scanning

use std::path::{Path, PathBuf};

use crate::string_utils::{base_name, stem_before_first_dot};

/// Resolve a `/`-separated path relative to the scan root.
pub fn resolve(root: &Path, rel: &str) -> PathBuf {
    let rel = rel.strip_prefix("./").unwrap_or(rel);
    if rel == "." || rel.is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel)
    }
}

/// Check if a child is a document candidate.
///
/// The whole relative path is searched for the suffix, so `notes.md.bak` and
/// anything below a directory named `x.md/` qualify too.
pub fn is_candidate(child_rel: &str, include_suffix: &str) -> bool {
    child_rel.contains(include_suffix)
}

/// Check if a file carries its directory's own name (`guides/guides.md`).
/// Such files act as the directory's summary and are not listed.
pub fn is_self_named(file_name: &str, dir_rel: &str) -> bool {
    stem_before_first_dot(file_name) == base_name(dir_rel)
}
