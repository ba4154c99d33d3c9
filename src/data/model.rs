// ---------------------------------------------------------------------------
// Table – the loaded numeric matrix
// ---------------------------------------------------------------------------

/// A rectangular numeric table (rows = samples, columns = fields).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Wrap already-parsed rows. The loader guarantees equal widths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Table { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns of the first row (0 for an empty table).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

// ---------------------------------------------------------------------------
// Triangle – the three body positions of one row
// ---------------------------------------------------------------------------

pub type Point = [f64; 2];

/// Positions of the three bodies at one sample time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Column 0 of the source row.
    pub time: f64,
    /// Columns (1,2), (3,4), (5,6).
    pub vertices: [Point; 3],
}

impl Triangle {
    /// Build from a row with at least 7 columns. Callers check the width.
    pub(crate) fn from_row(row: &[f64]) -> Self {
        Triangle {
            time: row[0],
            vertices: [[row[1], row[2]], [row[3], row[4]], [row[5], row[6]]],
        }
    }

    /// Vertices in drawing order, returning to the first one.
    pub fn closed_polyline(&self) -> [Point; 4] {
        let [a, b, c] = self.vertices;
        [a, b, c, a]
    }
}
