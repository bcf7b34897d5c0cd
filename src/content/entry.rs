//! Navigation entries

use serde::Serialize;

/// One link line in a generated index.
///
/// `file` is relative to the index that owns the entry and always uses `/`.
/// `title` is `None` when the document's first line has no title separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub indent: usize,
    pub title: Option<String>,
    pub file: String,
}

impl NavEntry {
    pub fn new(indent: usize, file: impl Into<String>, title: Option<String>) -> Self {
        Self {
            indent,
            title,
            file: file.into(),
        }
    }

    /// Copy of this entry as seen from the parent directory's index:
    /// one level deeper, with the target prefixed by the folder name.
    pub fn nested_under(&self, folder: &str) -> Self {
        Self {
            indent: self.indent + 1,
            title: self.title.clone(),
            file: format!("{}/{}", folder, self.file),
        }
    }
}
