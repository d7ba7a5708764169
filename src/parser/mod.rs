//! Block classifier for the Markdown subset
//!
//! Splits an input line sequence into alternating runs of plain lines and
//! table blocks, preserving input order. Classification never fails: any
//! line is either part of a table block (it contains the delimiter), a plain
//! line, or blank.

pub mod ast;
pub mod lexer;

pub use ast::{Block, Row};
pub use lexer::DELIMITER;

use std::mem;

/// Classify input text into an ordered sequence of blocks.
///
/// Contiguous delimiter lines are buffered and flushed as a single
/// [`Block::Table`] when a non-delimiter line (or end of input) is reached.
/// A delimiter line whose scan yields no cells contributes nothing, but also
/// does not interrupt the table block it sits inside.
pub fn classify(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending: Vec<Row> = Vec::new();

    for line in source.lines() {
        match lexer::scan_row(line) {
            Some(cells) => {
                if !cells.is_empty() {
                    pending.push(Row::new(cells));
                }
            }
            None => {
                if !pending.is_empty() {
                    blocks.push(Block::Table(mem::take(&mut pending)));
                }
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    blocks.push(Block::Blank);
                } else {
                    blocks.push(Block::Line(trimmed.to_string()));
                }
            }
        }
    }

    if !pending.is_empty() {
        blocks.push(Block::Table(pending));
    }

    blocks
}
