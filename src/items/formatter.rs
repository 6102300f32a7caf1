//! Formatting configuration for items

use crate::ansi::{ansi_format, Effect};

/// Control how an item's text output is formatted.
///
/// Every item owns a `Formatter`, cloned from its parent when none is
/// supplied at construction. Replacing or mutating one item's formatter
/// affects only that item's own later rendering; there is no cascading to
/// items already created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    /// Spaces of indentation added per level of nesting.
    pub indent_spaces: usize,
    /// Minimum columns between a definition's signature and its message
    /// when they share a line.
    pub definition_gap: usize,
    /// Column at which to wrap text.
    pub max_width: usize,
    /// Derive strong/emphasized markup from definition structure.
    pub auto_markup: bool,
    /// Parse `**strong**` and `*emphasized*` markup out of input text.
    pub manual_markup: bool,
    /// Include this item's content in the output.
    pub visible: bool,
    /// Escape pair surrounding strong text.
    pub strong: (String, String),
    /// Escape pair surrounding emphasized text.
    pub em: (String, String),
}

impl Default for Formatter {
    fn default() -> Formatter {
        Formatter {
            indent_spaces: 4,
            definition_gap: 2,
            max_width: 79,
            auto_markup: true,
            manual_markup: true,
            visible: true,
            strong: ansi_format(None, None, &[Effect::Bold]),
            em: ansi_format(None, None, &[Effect::Underline]),
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn default_markup_pairs() {
        let formatter = Formatter::default();
        assert_eq!(formatter.strong.0, "\x1b[1m");
        assert_eq!(formatter.em.0, "\x1b[4m");
        assert_eq!(formatter.strong.1, "\x1b[0m");
    }
}
