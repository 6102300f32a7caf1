//! Paragraph wrapping configured for column layout

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Wrap `text` to `width` columns, indenting the first line by `initial`
/// spaces and every following line by `subsequent` spaces.
///
/// Wrapping is greedy and breaks only at whitespace: a token longer than
/// the remaining width overflows its line rather than being split, so no
/// text is ever dropped or broken mid-token. The indents count toward the
/// width, matching how the layouts reserve columns for signatures.
pub fn fill(text: &str, width: usize, initial: usize, subsequent: usize) -> String {
    let first = " ".repeat(initial);
    let rest = " ".repeat(subsequent);

    let options = Options::new(width)
        .initial_indent(&first)
        .subsequent_indent(&rest)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::fill(text, &options)
}
