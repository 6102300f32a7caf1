//! Rendering routines for each kind of item

use crate::items::{Content, DefinitionStyle, Formatter, Item};
use crate::markup::{
    self, args_markup, message_markup, parse_manual_markup, term_markup, MarkupPositions,
};
use crate::wrap;

/// Render a single item at the given indentation, or nothing when the
/// item has no visible output.
pub(crate) fn render_item(item: &Item, indent: usize) -> Option<String> {
    let (content, formatter) = {
        let node = item.node.borrow();
        (node.content.clone(), node.formatter.clone())
    };

    match content {
        Content::Empty => None,
        Content::Text(text) => render_text(&formatter, indent, &text),
        Content::Definition {
            term,
            args,
            message,
            style,
        } => render_definition(item, &formatter, indent, &term, &args, &message, style),
    }
}

fn render_text(formatter: &Formatter, indent: usize, text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let (text, manual) = strip_manual(formatter, text);
    let wrapped = wrap::fill(&text, formatter.max_width, indent, indent);
    let positions = combined(formatter, &manual, &MarkupPositions::new());

    Some(markup::apply(
        &wrapped,
        &positions,
        &formatter.strong,
        &formatter.em,
    ))
}

fn render_definition(
    item: &Item,
    formatter: &Formatter,
    indent: usize,
    term: &str,
    args: &str,
    message: &str,
    style: DefinitionStyle,
) -> Option<String> {
    let (term, term_manual) = strip_manual(formatter, term);
    let (args, args_manual) = strip_manual(formatter, args);
    let (message, message_manual) = strip_manual(formatter, message);

    if term.is_empty() && args.is_empty() && message.trim().is_empty() {
        return None;
    }

    let term_positions = combined(formatter, &term_manual, &term_markup(&term));
    let args_positions = combined(formatter, &args_manual, &args_markup(&args));
    let message_positions = combined(
        formatter,
        &message_manual,
        &message_markup(&args, &message),
    );

    match style {
        DefinitionStyle::Block | DefinitionStyle::Overflow => {
            let signature = compose_signature(
                formatter,
                indent,
                &term,
                &args,
                &term_positions,
                &args_positions,
                0,
            );
            if message.trim().is_empty() {
                return Some(signature);
            }

            let (first, hanging) = match style {
                DefinitionStyle::Overflow => {
                    let column = aligned_column(item, formatter);
                    (indent + column, indent + column + formatter.indent_spaces)
                }
                _ => {
                    let inner = indent + formatter.indent_spaces;
                    (inner, inner)
                }
            };
            let wrapped = wrap::fill(&message, formatter.max_width, first, hanging);
            let body = markup::apply(
                &wrapped,
                &message_positions,
                &formatter.strong,
                &formatter.em,
            );

            Some(format!("{}\n{}", signature, body))
        }
        DefinitionStyle::Inline | DefinitionStyle::Aligned => {
            let column = match style {
                DefinitionStyle::Aligned => aligned_column(item, formatter),
                _ => signature_length(&term, &args) + formatter.definition_gap,
            };
            let signature = compose_signature(
                formatter,
                indent,
                &term,
                &args,
                &term_positions,
                &args_positions,
                column,
            );
            if message.trim().is_empty() {
                return Some(signature.trim_end().to_string());
            }

            let hanging = match style {
                DefinitionStyle::Aligned => indent + formatter.indent_spaces + column,
                _ => indent + formatter.indent_spaces,
            };
            let wrapped = wrap::fill(&message, formatter.max_width, indent + column, hanging);
            let body = markup::apply(
                &wrapped,
                &message_positions,
                &formatter.strong,
                &formatter.em,
            );

            // The first wrapped line starts with the columns reserved for
            // the signature; the signature itself replaces them.
            Some(format!("{}{}", signature, &body[indent + column..]))
        }
    }
}

/// Build the signature line: the term and argument string at the given
/// indentation, with markup spliced into each part separately so that
/// occurrence counting in one part cannot be disturbed by the other. With
/// a non-zero `pad_to`, the final line is padded out to that column.
fn compose_signature(
    formatter: &Formatter,
    indent: usize,
    term: &str,
    args: &str,
    term_positions: &MarkupPositions,
    args_positions: &MarkupPositions,
    pad_to: usize,
) -> String {
    let margin = " ".repeat(indent);
    let term_width = term.chars().count();

    let mut tail = String::new();
    if !args.is_empty() {
        let separator = if term.is_empty() { "" } else { " " };
        let reserve = indent + term_width + separator.len();

        if reserve + args.chars().count() <= formatter.max_width {
            tail = format!("{}{}", separator, args);
        } else {
            // Too long for one line: wrap the argument string around a
            // reservation for the term, continuing at the signature's own
            // indentation. The term itself is never split.
            let filled = wrap::fill(args, formatter.max_width, reserve, indent);
            tail = format!("{}{}", separator, &filled[reserve..]);
        }
    }

    let marked_term = markup::apply(term, term_positions, &formatter.strong, &formatter.em);
    let marked_tail = markup::apply(&tail, args_positions, &formatter.strong, &formatter.em);

    let mut signature = format!("{}{}{}", margin, marked_term, marked_tail);

    if pad_to > 0 {
        let width = last_line_width(term_width, &tail, indent);
        if pad_to > width {
            signature.push_str(&" ".repeat(pad_to - width));
        }
    }

    signature
}

/// The visible width of the signature's last line, not counting the
/// indentation margin.
fn last_line_width(term_width: usize, tail: &str, indent: usize) -> usize {
    match tail.rfind('\n') {
        None => term_width + tail.chars().count(),
        Some(position) => tail[position + 1..]
            .chars()
            .count()
            .saturating_sub(indent),
    }
}

/// The column at which aligned messages start: the longest signature of
/// any sibling definition with the [`DefinitionStyle::Aligned`] style,
/// plus the configured gap. With no such siblings, one indent increment.
fn aligned_column(item: &Item, formatter: &Formatter) -> usize {
    let mut longest: Option<usize> = None;

    if let Some(parent) = item.parent() {
        for sibling in parent.children() {
            if let Content::Definition {
                term,
                args,
                style: DefinitionStyle::Aligned,
                ..
            } = sibling.content()
            {
                let length = signature_length(&term, &args);
                longest = Some(longest.map_or(length, |current| current.max(length)));
            }
        }
    }

    match longest {
        Some(length) => length + formatter.definition_gap,
        None => formatter.indent_spaces,
    }
}

fn signature_length(term: &str, args: &str) -> usize {
    let term_width = term.chars().count();
    let args_width = args.chars().count();

    if term.is_empty() || args.is_empty() {
        term_width + args_width
    } else {
        term_width + 1 + args_width
    }
}

fn strip_manual(formatter: &Formatter, text: &str) -> (String, MarkupPositions) {
    if formatter.manual_markup {
        parse_manual_markup(text)
    } else {
        (text.to_string(), MarkupPositions::new())
    }
}

/// Combine manual and automatic positions for one piece of text, honoring
/// the formatter's enable flags. Manual markup comes first so it wins when
/// both would resolve to the same occurrence slot.
fn combined(
    formatter: &Formatter,
    manual: &MarkupPositions,
    auto: &MarkupPositions,
) -> MarkupPositions {
    let mut positions = MarkupPositions::new();
    if formatter.manual_markup {
        positions.extend(manual);
    }
    if formatter.auto_markup {
        positions.extend(auto);
    }

    positions
}

#[cfg(test)]
mod check {
    use super::*;

    fn plain() -> Formatter {
        Formatter {
            auto_markup: false,
            manual_markup: false,
            ..Formatter::default()
        }
    }

    #[test]
    fn signature_lengths() {
        assert_eq!(signature_length("diff", "[options]"), 14);
        assert_eq!(signature_length("diff", ""), 4);
        assert_eq!(signature_length("", "[options]"), 9);
    }

    #[test]
    fn signature_pads_to_the_requested_column() {
        let formatter = plain();
        let positions = MarkupPositions::new();
        let signature =
            compose_signature(&formatter, 0, "diff", "[options]", &positions, &positions, 16);
        assert_eq!(signature, "diff [options]  ");
    }

    #[test]
    fn over_long_signature_wraps_the_arguments() {
        let formatter = Formatter {
            max_width: 20,
            ..plain()
        };
        let positions = MarkupPositions::new();
        let signature = compose_signature(
            &formatter,
            0,
            "diff",
            "[options] number1..number2",
            &positions,
            &positions,
            0,
        );
        assert_eq!(signature, "diff [options]\nnumber1..number2");
    }
}
