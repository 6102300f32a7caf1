//! Recorded positions of marked-up substrings

/// A single markup instruction: the literal substring to be marked up and
/// which occurrence of it (counting non-overlapping exact matches from the
/// start of the text) is meant.
pub type Occurrence = (String, usize);

/// The positions of substrings within a piece of text that should receive
/// strong or emphasized markup when the text is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupPositions {
    pub strong: Vec<Occurrence>,
    pub em: Vec<Occurrence>,
}

impl MarkupPositions {
    pub fn new() -> MarkupPositions {
        MarkupPositions {
            strong: Vec::new(),
            em: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strong.is_empty() && self.em.is_empty()
    }

    /// Append another set of positions after the entries already present.
    /// Order matters: earlier entries win when two instructions resolve to
    /// the same occurrence slot.
    pub fn extend(&mut self, other: &MarkupPositions) {
        self.strong
            .extend(other.strong.iter().cloned());
        self.em
            .extend(other.em.iter().cloned());
    }
}
