//! Writing rendered documents to disk

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::Result;
use crate::fs::FileSystem;
use crate::tree::resolve;

use super::markdown::RenderedDocument;

/// Write every document below `root`, returning how many were written.
///
/// Documents target distinct paths, so they are written in parallel:
/// `workers == 0` uses rayon's global pool, `1` writes sequentially and `N`
/// uses a dedicated pool of N threads. The first error is returned; documents
/// already written stay in place.
pub fn write_documents(
    fs: &dyn FileSystem,
    root: &Path,
    docs: &[RenderedDocument],
    workers: usize,
) -> Result<usize> {
    let write_one = |doc: &RenderedDocument| -> Result<()> {
        let path = resolve(root, &doc.path);
        debug!(path = %path.display(), bytes = doc.data.len(), "writing index");
        fs.write_text(&path, &doc.data)
    };

    match workers {
        1 => docs.iter().try_for_each(write_one)?,
        0 => docs.par_iter().try_for_each(write_one)?,
        n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| docs.par_iter().try_for_each(write_one))?,
            Err(e) => {
                // Fall back to rayon's global pool if custom pool creation fails
                warn!(error = %e, "could not build writer pool, using global pool");
                docs.par_iter().try_for_each(write_one)?
            }
        },
    }

    Ok(docs.len())
}
