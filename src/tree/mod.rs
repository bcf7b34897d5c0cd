//! Directory tree scanning
//!
//! `TreeScanner` walks a documentation root and builds a [`TreeNode`] per
//! directory holding its documents and non-empty subdirectories. The whole
//! tree is built before anything downstream runs.

mod config;
mod node;
mod scanner;
mod utils;

pub use config::ScanConfig;
pub use node::TreeNode;
pub use scanner::TreeScanner;
pub use utils::resolve;
