//! Derivation of automatic markup from the structure of a definition

use std::sync::OnceLock;

use regex::Regex;

use crate::markup::{instance_of, MarkupPositions};

/// A run of word characters or hyphens is an argument token.
fn argument_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\w-]+").unwrap_or_else(|e| panic!("{}", e)))
}

/// Split an argument string into its argument tokens.
///
/// This is the same tokenization the automatic markup uses, exposed for
/// consumers that render definitions into their own document model.
pub fn arguments(args: &str) -> Vec<&str> {
    argument_pattern()
        .find_iter(args)
        .map(|found| found.as_str())
        .collect()
}

/// Markup positions for a definition's term: the whole term, strong.
pub fn term_markup(term: &str) -> MarkupPositions {
    let mut positions = MarkupPositions::new();
    if !term.is_empty() {
        positions
            .strong
            .push((term.to_string(), 0));
    }

    positions
}

/// Markup positions for a definition's argument string: every argument
/// token, emphasized, with occurrences counted within the argument string
/// itself.
pub fn args_markup(args: &str) -> MarkupPositions {
    let mut positions = MarkupPositions::new();
    for found in argument_pattern().find_iter(args) {
        let token = found.as_str();
        if let Some(instance) = instance_of(args, token, found.start()) {
            positions
                .em
                .push((token.to_string(), instance));
        }
    }

    positions
}

/// Markup positions for a definition's message: every appearance of an
/// argument token bounded by non-word characters (or the ends of the
/// message), emphasized.
pub fn message_markup(args: &str, message: &str) -> MarkupPositions {
    let mut positions = MarkupPositions::new();
    let mut seen: Vec<&str> = Vec::new();

    for token in arguments(args) {
        if seen.contains(&token) {
            continue;
        }
        seen.push(token);

        for (start, matched) in message.match_indices(token) {
            if !bounded(message, start, start + matched.len()) {
                continue;
            }
            if let Some(instance) = instance_of(message, token, start) {
                positions
                    .em
                    .push((token.to_string(), instance));
            }
        }
    }

    positions
}

/// A match only counts when it is a whole word: the characters on either
/// side, when present, must not be word characters.
fn bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().last();
    let after = text[end..].chars().next();

    !before.map_or(false, is_word) && !after.map_or(false, is_word)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
