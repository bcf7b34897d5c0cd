//! doctoc - generate README table-of-contents indices for a documentation tree
//!
//! The pipeline runs in strict sequence: the whole tree is scanned, then
//! flattened into a [`ContentMap`], then rendered into one index per
//! directory. Only the final writes run in parallel.

pub mod config;
pub mod content;
pub mod error;
pub mod exclude;
pub mod fs;
pub mod output;
pub mod string_utils;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::Path;

use tracing::info;

pub use config::TocConfig;
pub use content::{ContentMap, ContentMapper, NavEntry, extract_title};
pub use error::{Result, TocError};
pub use exclude::Exclusions;
pub use fs::{FileSystem, OsFileSystem};
pub use output::{MarkdownRenderer, RenderConfig, RenderedDocument, write_documents};
pub use tree::{ScanConfig, TreeNode, TreeScanner};

/// Outcome of a [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: Vec<RenderedDocument>,
    /// Number of documents written (0 on a dry run)
    pub written: usize,
}

/// Scan `root`, build the content map and render every index document.
///
/// Nothing is written; see [`run`] for the full regeneration.
pub fn generate(
    fs: &dyn FileSystem,
    config: &TocConfig,
    root: &Path,
) -> Result<Vec<RenderedDocument>> {
    let exclusions = Exclusions::load(fs, root, &config.ignore_file)?;
    let scan_config = ScanConfig {
        exclusions,
        ..config.scan_config()
    };

    let tree = TreeScanner::new(scan_config).scan(fs, root)?;
    let map = ContentMapper::new(fs, root, config.index_name.as_str()).build(&tree)?;
    Ok(MarkdownRenderer::new(config.render_config()).render(&map))
}

/// Regenerate every index below `root`. With `dry_run` the documents are
/// rendered but not written.
pub fn run(
    fs: &dyn FileSystem,
    config: &TocConfig,
    root: &Path,
    dry_run: bool,
) -> Result<RunSummary> {
    let documents = generate(fs, config, root)?;
    let written = if dry_run {
        0
    } else {
        write_documents(fs, root, &documents, config.parallel_workers)?
    };
    info!(
        root = %root.display(),
        documents = documents.len(),
        written,
        "table of contents generated"
    );
    Ok(RunSummary { documents, written })
}
