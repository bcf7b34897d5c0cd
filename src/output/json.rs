//! JSON output formatting

use std::io::Write;

use crate::error::{Result, TocError};

use super::markdown::RenderedDocument;

/// Serialize rendered documents as a pretty-printed JSON array.
pub fn to_json(docs: &[RenderedDocument]) -> Result<String> {
    Ok(serde_json::to_string_pretty(docs)?)
}

/// Print rendered documents as pretty-printed JSON to stdout.
pub fn print_json(docs: &[RenderedDocument]) -> Result<()> {
    let json = to_json(docs)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).map_err(|e| TocError::io("<stdout>", e))
}
