use super::error::TableError;
use super::model::{Table, Triangle};

/// Number of trailing rows drawn.
pub const WINDOW_ROWS: usize = 34;

/// Column 0 (time) plus three coordinate pairs.
pub const REQUIRED_COLUMNS: usize = 7;

// ---------------------------------------------------------------------------
// Trailing window
// ---------------------------------------------------------------------------

/// Return the last `n` rows in their original order.
///
/// A table shorter than `n` yields every row; only an empty table is an error.
pub fn trailing_window(table: &Table, n: usize) -> Result<&[Vec<f64>], TableError> {
    if table.is_empty() {
        return Err(TableError::Empty);
    }
    let rows = table.rows();
    let start = rows.len().saturating_sub(n);
    Ok(&rows[start..])
}

/// Convert each row of the window into a [`Triangle`].
///
/// `first_row` is the table index of `rows[0]`, used in error reports.
pub fn triangles(rows: &[Vec<f64>], first_row: usize) -> Result<Vec<Triangle>, TableError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            if row.len() < REQUIRED_COLUMNS {
                return Err(TableError::TooFewColumns {
                    row: first_row + i,
                    found: row.len(),
                    required: REQUIRED_COLUMNS,
                });
            }
            Ok(Triangle::from_row(row))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Time span of the window (column 0)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    pub fn of(triangles: &[Triangle]) -> Option<Self> {
        let first = triangles.first()?;
        let last = triangles.last()?;
        Some(TimeSpan {
            start: first.time,
            end: last.time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_table(n_rows: usize) -> Table {
        Table::from_rows(
            (0..n_rows)
                .map(|i| {
                    let v = i as f64;
                    vec![v, v, v + 0.1, v + 0.2, v + 0.3, v + 0.4, v + 0.5]
                })
                .collect(),
        )
    }

    #[test]
    fn long_table_keeps_exactly_the_last_rows_in_order() {
        let table = numbered_table(100);
        let window = trailing_window(&table, WINDOW_ROWS).unwrap();
        assert_eq!(window.len(), WINDOW_ROWS);
        let times: Vec<f64> = window.iter().map(|r| r[0]).collect();
        let expected: Vec<f64> = (66..100).map(|i| i as f64).collect();
        assert_eq!(times, expected);
    }

    #[test]
    fn exact_window_size_keeps_every_row() {
        let table = numbered_table(WINDOW_ROWS);
        let window = trailing_window(&table, WINDOW_ROWS).unwrap();
        assert_eq!(window, table.rows());
    }

    #[test]
    fn short_table_is_clamped_to_the_whole_table() {
        let table = numbered_table(5);
        let window = trailing_window(&table, WINDOW_ROWS).unwrap();
        assert_eq!(window, table.rows());
    }

    #[test]
    fn empty_table_is_reported() {
        let table = Table::default();
        assert_eq!(trailing_window(&table, WINDOW_ROWS), Err(TableError::Empty));
    }

    #[test]
    fn two_row_table_end_to_end() {
        let table = Table::from_rows(vec![
            vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
            vec![0.0, 4.0, 4.0, 5.0, 5.0, 6.0, 6.0],
        ]);
        let window = trailing_window(&table, WINDOW_ROWS).unwrap();
        assert_eq!(window.len(), 2);

        let tris = triangles(window, 0).unwrap();
        assert_eq!(tris[0].vertices, [[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
        assert_eq!(tris[1].vertices, [[4.0, 4.0], [5.0, 5.0], [6.0, 6.0]]);
    }

    #[test]
    fn short_row_is_rejected_with_its_index() {
        let rows = vec![
            vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
            vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0],
        ];
        assert_eq!(
            triangles(&rows, 0),
            Err(TableError::TooFewColumns {
                row: 1,
                found: 6,
                required: REQUIRED_COLUMNS,
            })
        );
    }

    #[test]
    fn short_row_is_reported_by_its_table_index() {
        let table = Table::from_rows((0..1000).map(|i| vec![i as f64, 1.0, 2.0]).collect());
        let window = trailing_window(&table, WINDOW_ROWS).unwrap();
        let first_row = table.len() - window.len();
        assert_eq!(
            triangles(window, first_row),
            Err(TableError::TooFewColumns {
                row: 966,
                found: 3,
                required: REQUIRED_COLUMNS,
            })
        );
    }

    #[test]
    fn time_span_uses_first_and_last_rows() {
        let table = numbered_table(40);
        let window = trailing_window(&table, WINDOW_ROWS).unwrap();
        let tris = triangles(window, 6).unwrap();
        assert_eq!(
            TimeSpan::of(&tris),
            Some(TimeSpan {
                start: 6.0,
                end: 39.0
            })
        );
        assert_eq!(TimeSpan::of(&[]), None);
    }
}
