//! Markdown rendering of index documents
//!
//! Each directory of a [`ContentMap`] becomes one `README.md`: a heading
//! (with a back-link to the parent index below the root), a section label,
//! and a nested bullet list of links.

use serde::Serialize;

use crate::content::{ContentMap, NavEntry, ROOT_KEY, TITLE_SEPARATOR};
use crate::string_utils::{base_name, capitalize};

use super::config::RenderConfig;

/// Text rendered for an entry whose document had no title.
pub const UNDEFINED_TITLE: &str = "undefined";

/// A generated index: path relative to the scan root, and its full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub path: String,
    pub data: String,
}

/// Renders a [`ContentMap`] into one [`RenderedDocument`] per directory.
pub struct MarkdownRenderer {
    config: RenderConfig,
}

impl MarkdownRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render every directory in map order. Pure text construction.
    pub fn render(&self, map: &ContentMap) -> Vec<RenderedDocument> {
        map.iter()
            .map(|(dir, entries)| self.render_dir(dir, entries))
            .collect()
    }

    /// Render the index for a single directory.
    pub fn render_dir(&self, dir: &str, entries: &[NavEntry]) -> RenderedDocument {
        let mut data = self.header(dir);
        data.push_str("\n\n## ");
        data.push_str(&self.config.section_label);
        data.push_str("\n\n");

        for entry in entries {
            if entry.file == self.config.index_name {
                continue;
            }
            push_entry(&mut data, entry);
        }

        RenderedDocument {
            path: format!("{}/{}", dir, self.config.index_name),
            data,
        }
    }

    fn header(&self, dir: &str) -> String {
        let name = base_name(dir);
        if name == ROOT_KEY {
            format!("# {}", self.config.main_title)
        } else {
            format!(
                "# [<](../{}){}{} {}",
                self.config.index_name,
                TITLE_SEPARATOR,
                capitalize(name),
                self.config.section_noun
            )
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Append `* [title](file)` indented by two spaces per level.
fn push_entry(out: &mut String, entry: &NavEntry) {
    out.push_str(&"  ".repeat(entry.indent));
    out.push_str("* [");
    out.push_str(entry.title.as_deref().unwrap_or(UNDEFINED_TITLE));
    out.push_str("](");
    out.push_str(&entry.file);
    out.push_str(")\n");
}
