//! Generator configuration

use crate::output::RenderConfig;
use crate::tree::ScanConfig;

/// File name of every generated index.
pub const DEFAULT_INDEX_NAME: &str = "README.md";

/// Documents are children whose relative path contains this string.
pub const DEFAULT_INCLUDE_SUFFIX: &str = ".md";

/// Ignore file read from the root for the exclusion list.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

pub const DEFAULT_MAIN_TITLE: &str = "Edge Development Conventions";
pub const DEFAULT_SECTION_NOUN: &str = "Conventions";
pub const DEFAULT_SECTION_LABEL: &str = "Table of Contents";

/// Configuration for a full generation run.
#[derive(Debug, Clone)]
pub struct TocConfig {
    pub include_suffix: String,
    pub index_name: String,
    pub ignore_file: String,
    /// Heading of the root index
    pub main_title: String,
    /// Word appended to a subdirectory's heading ("Guides Conventions")
    pub section_noun: String,
    pub section_label: String,
    /// Sort directory listings by name
    pub sort_children: bool,
    /// Number of parallel workers for writing documents.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}

impl TocConfig {
    /// Scanner configuration; exclusions are loaded separately.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            include_suffix: self.include_suffix.clone(),
            sort_children: self.sort_children,
            ..Default::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            main_title: self.main_title.clone(),
            section_noun: self.section_noun.clone(),
            section_label: self.section_label.clone(),
            index_name: self.index_name.clone(),
        }
    }
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            include_suffix: DEFAULT_INCLUDE_SUFFIX.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            main_title: DEFAULT_MAIN_TITLE.to_string(),
            section_noun: DEFAULT_SECTION_NOUN.to_string(),
            section_label: DEFAULT_SECTION_LABEL.to_string(),
            sort_children: true,
            parallel_workers: 0,
        }
    }
}
