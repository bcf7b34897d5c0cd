//! Configuration types for the tree scanner

use crate::config::DEFAULT_INCLUDE_SUFFIX;
use crate::exclude::Exclusions;

/// Configuration for tree scanning behavior.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// A child whose relative path contains this string is treated as a document.
    /// Matched as a substring, not as an extension.
    pub include_suffix: String,
    pub exclusions: Exclusions,
    /// Sort directory listings by name before processing
    pub sort_children: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_suffix: DEFAULT_INCLUDE_SUFFIX.to_string(),
            exclusions: Exclusions::new(),
            sort_children: true,
        }
    }
}
