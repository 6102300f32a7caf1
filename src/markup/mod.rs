//! Resolution of inline markup positions for help text
//!
//! Markup is recorded as substring/occurrence pairs rather than character
//! offsets, because both wrapping and delimiter stripping move offsets
//! around between the time markup is discovered and the time escape
//! sequences are finally spliced in. Finding "the n-th occurrence of this
//! substring" in the finished text keeps manual and automatic markup
//! composable right up to the last pass.

mod apply;
mod auto;
mod manual;
mod positions;

// Re-export all public symbols
pub use apply::*;
pub use auto::*;
pub use manual::*;
pub use positions::*;

/// Determine which occurrence of `substring` within `text` begins at the
/// byte offset `start`, counting non-overlapping matches from the left.
pub(crate) fn instance_of(text: &str, substring: &str, start: usize) -> Option<usize> {
    if substring.is_empty() {
        return None;
    }

    text.match_indices(substring)
        .position(|(offset, _)| offset == start)
}
