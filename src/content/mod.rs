//! Content mapping
//!
//! Turns a scanned [`TreeNode`](crate::tree::TreeNode) into a [`ContentMap`]:
//! one ordered, indent-annotated list of [`NavEntry`] per directory.

mod entry;
mod map;
mod mapper;
mod title;

pub use entry::NavEntry;
pub use map::{ContentMap, ROOT_KEY};
pub use mapper::ContentMapper;
pub use title::{TITLE_SEPARATOR, extract_title};
