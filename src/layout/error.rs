//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation.
///
/// Malformed content (ragged rows, empty cells) degrades gracefully and does
/// not error; the only failure is an internal invariant violation.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A table block with zero rows reached the layout step. The classifier
    /// never flushes an empty buffer, so this is a programming error.
    #[error("table block has no rows")]
    EmptyTable,
}
