//! Index document rendering and output
//!
//! # Module Structure
//!
//! - `config` - Render configuration types
//! - `markdown` - Markdown renderer for index documents
//! - `writer` - Writes rendered documents through the filesystem
//! - `json` - JSON preview output

mod config;
mod json;
mod markdown;
mod writer;

use std::io::Write;

use crate::error::{Result, TocError};

pub use config::RenderConfig;
pub use json::{print_json, to_json};
pub use markdown::{MarkdownRenderer, RenderedDocument, UNDEFINED_TITLE};
pub use writer::write_documents;

/// Print rendered documents to stdout, each preceded by a path banner.
pub fn print_documents(docs: &[RenderedDocument]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for doc in docs {
        write!(stdout, "==> {} <==\n{}\n", doc.path, doc.data)
            .map_err(|e| TocError::io("<stdout>", e))?;
    }
    Ok(())
}
