//! Generation of ANSI escape sequences for coloured and styled text

// Re-export all public symbols
mod codes;

pub use codes::*;
