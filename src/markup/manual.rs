//! Scanner for manual inline markup written directly in input text

use crate::markup::{instance_of, MarkupPositions};

const STRONG_DELIMITER: &str = "**";
const EM_DELIMITER: &str = "*";

/// Remove inline markup delimiters from text and record the positions of
/// the substrings they surrounded.
///
/// Only two kinds of markup are recognized: `**strong**` and
/// `*emphasized*`. The scan is permissive; an opening delimiter with no
/// matching closer is left in the text as literal characters rather than
/// being treated as an error.
///
/// ```
/// use galley::markup::parse_manual_markup;
///
/// let (text, positions) = parse_manual_markup("marching two by *two*");
/// assert_eq!(text, "marching two by two");
/// assert_eq!(positions.em, vec![("two".to_string(), 1)]);
/// ```
pub fn parse_manual_markup(text: &str) -> (String, MarkupPositions) {
    let mut stripped = String::with_capacity(text.len());
    let mut strong_spans: Vec<(String, usize)> = Vec::new();
    let mut em_spans: Vec<(String, usize)> = Vec::new();

    let mut rest = text;
    loop {
        let next = match rest.find(EM_DELIMITER) {
            Some(offset) => offset,
            None => {
                stripped.push_str(rest);
                break;
            }
        };

        stripped.push_str(&rest[..next]);
        let tail = &rest[next..];

        let delimiter = if tail.starts_with(STRONG_DELIMITER) {
            STRONG_DELIMITER
        } else {
            EM_DELIMITER
        };
        let body = &tail[delimiter.len()..];

        match closing_delimiter(body, delimiter) {
            Some(end) => {
                let content = &body[..end];
                let start = stripped.len();
                stripped.push_str(content);

                if delimiter == STRONG_DELIMITER {
                    strong_spans.push((content.to_string(), start));
                } else {
                    em_spans.push((content.to_string(), start));
                }

                rest = &body[end + delimiter.len()..];
            }
            None => {
                // Unclosed markup is inert; emit the delimiter literally
                // and carry on scanning after it.
                stripped.push_str(delimiter);
                rest = body;
            }
        }
    }

    let mut positions = MarkupPositions::new();
    for (substring, start) in strong_spans {
        if let Some(instance) = instance_of(&stripped, &substring, start) {
            positions
                .strong
                .push((substring, instance));
        }
    }
    for (substring, start) in em_spans {
        if let Some(instance) = instance_of(&stripped, &substring, start) {
            positions
                .em
                .push((substring, instance));
        }
    }

    (stripped, positions)
}

/// Find the byte offset of the closing delimiter within `body`, the text
/// immediately following an opening delimiter. Markup must hug its
/// content: the character after the opener and the character before the
/// closer must not be whitespace, and the content must be non-empty.
fn closing_delimiter(body: &str, delimiter: &str) -> Option<usize> {
    let first = body.chars().next()?;
    if first.is_whitespace() {
        return None;
    }

    let mut search_from = 0;
    while let Some(found) = body[search_from..].find(delimiter) {
        let offset = search_from + found;
        if offset == 0 {
            return None;
        }

        let before = body[..offset].chars().last()?;
        if before.is_whitespace() {
            search_from = offset + delimiter.len();
            continue;
        }

        return Some(offset);
    }

    None
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        let (text, positions) = parse_manual_markup("no markup here");
        assert_eq!(text, "no markup here");
        assert!(positions.is_empty());
    }

    #[test]
    fn strong_and_em_extracted() {
        let (text, positions) =
            parse_manual_markup("The **ants** were marching two by *two*.");
        assert_eq!(text, "The ants were marching two by two.");
        assert_eq!(positions.strong, vec![("ants".to_string(), 0)]);
        assert_eq!(positions.em, vec![("two".to_string(), 1)]);
    }

    #[test]
    fn unclosed_markup_is_literal() {
        let (text, positions) = parse_manual_markup("a *lone delimiter");
        assert_eq!(text, "a *lone delimiter");
        assert!(positions.is_empty());
    }

    #[test]
    fn spaced_asterisks_are_not_markup() {
        let (text, positions) = parse_manual_markup("2 * 3 * 4");
        assert_eq!(text, "2 * 3 * 4");
        assert!(positions.is_empty());
    }

    #[test]
    fn strong_content_is_not_rescanned() {
        // The inner delimiters stay literal; only the outer pair counts.
        let (text, positions) = parse_manual_markup("**bold *inner* bold**");
        assert_eq!(text, "bold *inner* bold");
        assert_eq!(
            positions.strong,
            vec![("bold *inner* bold".to_string(), 0)]
        );
        assert!(positions.em.is_empty());
    }

    #[test]
    fn repeated_substring_counts_occurrences() {
        let (text, positions) = parse_manual_markup("cat cat *cat*");
        assert_eq!(text, "cat cat cat");
        assert_eq!(positions.em, vec![("cat".to_string(), 2)]);
    }
}
