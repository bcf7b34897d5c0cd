//! In-memory representation of a scanned directory

use serde::Serialize;

/// One scanned directory: its qualifying documents and non-empty subdirectories.
///
/// `folders` keeps the order in which subdirectories were encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub files: Vec<String>,
    pub folders: Vec<(String, TreeNode)>,
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the directory has neither documents nor subdirectories.
    /// Such nodes are pruned from their parent.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Look up a direct subdirectory by name.
    pub fn folder(&self, name: &str) -> Option<&TreeNode> {
        self.folders
            .iter()
            .find(|(folder, _)| folder == name)
            .map(|(_, node)| node)
    }

    pub fn folder_names(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(|(name, _)| name.as_str())
    }

    /// Number of directories in this subtree, including this one.
    pub fn dir_count(&self) -> usize {
        1 + self
            .folders
            .iter()
            .map(|(_, node)| node.dir_count())
            .sum::<usize>()
    }
}
