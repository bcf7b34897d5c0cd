//! Output configuration types

use crate::config::{
    DEFAULT_INDEX_NAME, DEFAULT_MAIN_TITLE, DEFAULT_SECTION_LABEL, DEFAULT_SECTION_NOUN,
};

/// Configuration for rendering index documents.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Heading of the root index
    pub main_title: String,
    /// Appended to a subdirectory's capitalized name in its heading
    pub section_noun: String,
    /// Second-level heading above the entry list
    pub section_label: String,
    pub index_name: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            main_title: DEFAULT_MAIN_TITLE.to_string(),
            section_noun: DEFAULT_SECTION_NOUN.to_string(),
            section_label: DEFAULT_SECTION_LABEL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}
