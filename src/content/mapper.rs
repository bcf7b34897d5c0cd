//! ContentMapper - flattens a scanned tree into per-directory entry lists

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::fs::FileSystem;
use crate::string_utils::{capitalize, join_rel};
use crate::tree::{TreeNode, resolve};

use super::entry::NavEntry;
use super::map::{ContentMap, ROOT_KEY};
use super::title::extract_title;

/// Builds a [`ContentMap`] from a [`TreeNode`], reading each document's
/// first line for its title.
pub struct ContentMapper<'a> {
    fs: &'a dyn FileSystem,
    root: &'a Path,
    index_name: String,
}

impl<'a> ContentMapper<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: &'a Path, index_name: impl Into<String>) -> Self {
        Self {
            fs,
            root,
            index_name: index_name.into(),
        }
    }

    /// Build the map for the whole tree, keyed from the root (`.`).
    pub fn build(&self, tree: &TreeNode) -> Result<ContentMap> {
        self.build_at(tree, ROOT_KEY)
    }

    /// Build the map for `node`, which lives at `dir` relative to the root.
    ///
    /// The result holds `dir` first, followed by every descendant directory.
    /// Files come before folders in `dir`'s list, and each folder link is
    /// immediately followed by that folder's own entries one level deeper.
    pub fn build_at(&self, node: &TreeNode, dir: &str) -> Result<ContentMap> {
        let mut result = ContentMap::new();
        // Reserve the slot so this directory precedes its descendants
        result.insert(dir, Vec::new());

        let mut content = Vec::with_capacity(node.files.len() + node.folders.len());

        for file in &node.files {
            if *file == self.index_name {
                continue;
            }
            let path = resolve(self.root, &join_rel(dir, file));
            let text = self.fs.read_text(&path)?;
            let title = extract_title(&text);
            if title.is_none() {
                warn!(path = %path.display(), "first line has no title separator");
            }
            content.push(NavEntry::new(0, file.clone(), title));
        }

        for (folder, child) in &node.folders {
            let child_dir = join_rel(dir, folder);
            let child_map = self.build_at(child, &child_dir)?;
            result.merge(child_map);

            content.push(NavEntry::new(
                0,
                format!("{}/{}", folder, self.index_name),
                Some(capitalize(folder)),
            ));
            content.extend(
                result
                    .get(&child_dir)
                    .unwrap_or_default()
                    .iter()
                    .map(|entry| entry.nested_under(folder)),
            );
        }

        debug!(dir, entries = content.len(), "mapped directory");
        result.insert(dir, content);
        Ok(result)
    }
}
