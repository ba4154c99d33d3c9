use std::path::Path;

use anyhow::{Context, Result};

use super::error::TableError;
use super::model::Table;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited numeric table from a text file.
pub fn load_file(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading table file {}", path.display()))?;
    let table =
        parse_table(&text).with_context(|| format!("parsing table file {}", path.display()))?;
    Ok(table)
}

// ---------------------------------------------------------------------------
// Text parser
// ---------------------------------------------------------------------------

/// Parse a numeric table from text.
///
/// Layout (no header):
///
/// ```text
/// # t  x0 y0 x1 y1 x2 y2 ...
/// 0.00000000e+00 6.00000000e+00 8.20000000e+00 ...
/// 2.50000000e-01 6.09834522e+00 8.09113018e+00 ...
/// ```
///
/// * fields are separated by any run of spaces or tabs
/// * blank lines are skipped, `#` starts a comment
/// * every data line must have the same number of fields
pub fn parse_table(text: &str) -> Result<Table, TableError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut expected: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        };
        if content.trim().is_empty() {
            continue;
        }

        let row = content
            .split_whitespace()
            .enumerate()
            .map(|(col, tok)| {
                tok.parse::<f64>().map_err(|_| TableError::InvalidNumber {
                    line: line_no,
                    column: col,
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, TableError>>()?;

        match expected {
            None => expected = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(TableError::RaggedRow {
                    line: line_no,
                    expected: n,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }

        rows.push(row);
    }

    Ok(Table::from_rows(rows))
}
