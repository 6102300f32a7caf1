//! Splicing of escape sequences into finished text

use regex::Regex;

use crate::markup::MarkupPositions;

/// Insert escape sequences into already-wrapped text at the recorded
/// markup positions.
///
/// `positions` is the combined instruction list for the text, with
/// higher-priority entries first; `strong` and `em` are the start/end
/// sequence pairs to splice in. An instruction whose occurrence cannot be
/// located is skipped silently — this happens when manual and automatic
/// markup describe conflicting spans, and degrading to "less markup" is
/// preferable to failing the whole render.
pub fn apply(
    text: &str,
    positions: &MarkupPositions,
    strong: &(String, String),
    em: &(String, String),
) -> String {
    let mut spans: Vec<((usize, usize), &(String, String))> = Vec::new();

    for (substring, instance) in &positions.strong {
        if let Some(span) = locate(text, substring, *instance) {
            spans.push((span, strong));
        }
    }
    for (substring, instance) in &positions.em {
        if let Some(span) = locate(text, substring, *instance) {
            spans.push((span, em));
        }
    }

    if spans.is_empty() {
        return text.to_string();
    }

    // Sort by start offset; a span that fully contains another must come
    // first so the containing pair opens before the contained one.
    spans.sort_by(|a, b| {
        let ((a_start, a_end), _) = a;
        let ((b_start, b_end), _) = b;
        a_start
            .cmp(b_start)
            .then(b_end.cmp(a_end))
    });

    // Interleave the escape sequences, tracking which spans are still open
    // so that closing an inner span re-asserts the styling of any span
    // still open around it. Escape sequences are not stack-based; the end
    // sequence resets everything, so the outer start sequence has to be
    // emitted again.
    let mut sequences: Vec<(usize, &str)> = Vec::new();
    let mut open: Vec<(usize, &str)> = Vec::new();

    for ((start, end), pair) in spans {
        let start_sequence = pair.0.as_str();
        let end_sequence = pair.1.as_str();

        open.retain(|(position, _)| *position > start);

        sequences.push((start, start_sequence));
        sequences.push((end, end_sequence));
        for (position, sequence) in &open {
            if *position > end {
                sequences.push((end, *sequence));
            }
        }

        open.push((end, start_sequence));
    }

    sequences.sort_by_key(|(position, _)| *position);

    let mut output = String::with_capacity(text.len());
    let mut previous = 0;
    for (position, sequence) in sequences {
        output.push_str(&text[previous..position]);
        output.push_str(sequence);
        previous = position;
    }
    output.push_str(&text[previous..]);

    output
}

/// Find the byte span of the `instance`-th occurrence of `substring` in
/// `text`. A space in the substring matches any run of whitespace, so an
/// occurrence recorded before wrapping is still found after the wrapper
/// has replaced one of its spaces with a line break and indentation.
fn locate(text: &str, substring: &str, instance: usize) -> Option<(usize, usize)> {
    let words: Vec<String> = substring
        .split_whitespace()
        .map(regex::escape)
        .collect();
    if words.is_empty() {
        return None;
    }

    let pattern = words.join(r"\s+");
    let matcher = Regex::new(&pattern).ok()?;

    let located = matcher
        .find_iter(text)
        .nth(instance)
        .map(|found| (found.start(), found.end()));
    located
}

#[cfg(test)]
mod check {
    use super::*;

    fn pairs() -> ((String, String), (String, String)) {
        (
            ("<b>".to_string(), "</>".to_string()),
            ("<u>".to_string(), "</>".to_string()),
        )
    }

    #[test]
    fn second_occurrence_is_marked() {
        let (strong, em) = pairs();
        let mut positions = MarkupPositions::new();
        positions
            .em
            .push(("cat".to_string(), 1));

        let output = apply("cat cat cat", &positions, &strong, &em);
        assert_eq!(output, "cat <u>cat</> cat");
    }

    #[test]
    fn missing_occurrence_is_skipped() {
        let (strong, em) = pairs();
        let mut positions = MarkupPositions::new();
        positions
            .em
            .push(("cat".to_string(), 5));

        let output = apply("cat cat cat", &positions, &strong, &em);
        assert_eq!(output, "cat cat cat");
    }

    #[test]
    fn span_survives_a_line_break() {
        let (strong, em) = pairs();
        let mut positions = MarkupPositions::new();
        positions
            .em
            .push(("may interrupt".to_string(), 0));

        let output = apply("which may\ninterrupt the parsing", &positions, &strong, &em);
        assert_eq!(output, "which <u>may\ninterrupt</> the parsing");
    }

    #[test]
    fn nested_spans_reopen_the_outer_pair() {
        let (strong, em) = pairs();
        let mut positions = MarkupPositions::new();
        positions
            .strong
            .push(("FILE, one per".to_string(), 0));
        positions
            .em
            .push(("FILE".to_string(), 0));

        let output = apply(
            "Obtain patterns from FILE, one per line.",
            &positions,
            &strong,
            &em,
        );
        assert_eq!(
            output,
            "Obtain patterns from <b><u>FILE</><b>, one per</> line."
        );
    }

    #[test]
    fn identical_spans_nest_cleanly() {
        let (strong, em) = pairs();
        let mut positions = MarkupPositions::new();
        positions
            .strong
            .push(("FILE".to_string(), 0));
        positions
            .em
            .push(("FILE".to_string(), 0));

        let output = apply("read FILE now", &positions, &strong, &em);
        assert_eq!(output, "read <b><u>FILE</></> now");
    }
}
