//! Greedy cell-text wrapping
//!
//! Words are packed onto lines under a character budget. The budget is soft:
//! a word longer than the budget stays whole on its own line, and words are
//! never broken at hyphens.

use textwrap::{Options, WordSeparator, WordSplitter};

/// Wrap one cell's text into sub-lines.
///
/// With no budget the text is returned as a single sub-line. Every returned
/// sub-line has trailing whitespace stripped, and the result is never empty:
/// a whitespace-only cell wraps to one empty sub-line.
pub fn wrap_cell(text: &str, max_chars: Option<usize>) -> Vec<String> {
    let lines: Vec<String> = match max_chars {
        None => vec![text.trim_end().to_string()],
        Some(budget) => {
            let options = Options::new(budget)
                .word_separator(WordSeparator::AsciiSpace)
                .word_splitter(WordSplitter::NoHyphenation)
                .break_words(false);
            textwrap::wrap(text, options)
                .into_iter()
                .map(|line| line.trim_end().to_string())
                .collect()
        }
    };

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
