//! Lexer for table rows using logos
//!
//! A row line is scanned into alternating delimiter and cell-text tokens.
//! The scan is permissive: anything between delimiters counts as cell text,
//! surrounding whitespace is trimmed, and empty captures are dropped.

use logos::Logos;

/// The column delimiter that marks a line as part of a table block.
pub const DELIMITER: char = '|';

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("|")]
    Delimiter,

    /// A run of non-delimiter characters (may be pure whitespace).
    #[regex(r"[^|]+")]
    CellText,
}

/// Scan one line as a potential table row.
///
/// Returns `None` if the line contains no delimiter (it is not a table row).
/// Otherwise returns the trimmed, non-empty cell captures in order. A line of
/// pure delimiters yields `Some` with an empty vector.
pub fn scan_row(line: &str) -> Option<Vec<String>> {
    let mut saw_delimiter = false;
    let mut cells = Vec::new();

    let mut lexer = Token::lexer(line);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Delimiter) => saw_delimiter = true,
            Ok(Token::CellText) => {
                let text = lexer.slice().trim();
                if !text.is_empty() {
                    cells.push(text.to_string());
                }
            }
            // The two patterns cover every character, so the lexer cannot fail.
            Err(()) => {}
        }
    }

    saw_delimiter.then_some(cells)
}
