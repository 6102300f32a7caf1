//! The item tree: construction, traversal and rendering

mod error;
mod formatter;
mod layout;
mod tree;

// Re-export all public symbols
pub use error::*;
pub use formatter::*;
pub use tree::*;
