use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – everything that can be wrong with an input table
// ---------------------------------------------------------------------------

/// Errors raised while parsing a table or shaping it into triangles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("input table is empty")]
    Empty,

    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// `row` is the 0-based index in the whole table.
    #[error("table row {row} has {found} columns, at least {required} are required")]
    TooFewColumns {
        row: usize,
        found: usize,
        required: usize,
    },
}
