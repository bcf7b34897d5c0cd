//! TreeScanner - builds the document tree in memory

use std::path::Path;

use tracing::{debug, trace};

use crate::error::Result;
use crate::fs::FileSystem;
use crate::string_utils::join_rel;

use super::config::ScanConfig;
use super::node::TreeNode;
use super::utils::{is_candidate, is_self_named, resolve};

/// Scanner that walks a documentation root and builds a [`TreeNode`].
///
/// Paths are tracked relative to the root (`.` for the root itself), which
/// is also what exclusion fragments are matched against.
pub struct TreeScanner {
    config: ScanConfig,
}

impl TreeScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root`. A root that does not exist yields an empty tree.
    pub fn scan(&self, fs: &dyn FileSystem, root: &Path) -> Result<TreeNode> {
        self.scan_dir(fs, root, ".")
    }

    fn scan_dir(&self, fs: &dyn FileSystem, root: &Path, rel: &str) -> Result<TreeNode> {
        let mut node = TreeNode::new();
        let dir = resolve(root, rel);
        if !fs.exists(&dir) {
            debug!(path = %dir.display(), "start directory missing, treating as empty");
            return Ok(node);
        }

        let mut names = fs.list_children(&dir)?;
        if self.config.sort_children {
            names.sort();
        }

        for name in names {
            let child_rel = join_rel(rel, &name);

            if self.config.exclusions.contains(&child_rel) {
                debug!(path = %child_rel, "excluded");
                continue;
            }

            // Directory recursion and the document check are independent:
            // a directory named `x.md` is both descended into and listed.
            if fs.is_dir(&dir.join(&name)) {
                let child = self.scan_dir(fs, root, &child_rel)?;
                if child.is_empty() {
                    trace!(path = %child_rel, "pruned empty directory");
                } else {
                    node.folders.push((name.clone(), child));
                }
            }

            if is_candidate(&child_rel, &self.config.include_suffix) {
                if is_self_named(&name, rel) {
                    trace!(path = %child_rel, "skipped self-named document");
                } else {
                    node.files.push(name);
                }
            }
        }

        Ok(node)
    }
}
