use std::path::{Path, PathBuf};

use crate::color::FigureStyle;
use crate::data::loader::load_file;
use crate::data::model::{Table, Triangle};
use crate::data::window::{trailing_window, triangles, TimeSpan, WINDOW_ROWS};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the table was (or will be) read from.
    pub source: PathBuf,

    /// Loaded table (None until a load succeeds).
    pub table: Option<Table>,

    /// One triangle per row of the trailing window.
    pub triangles: Vec<Triangle>,

    /// Column 0 of the first and last window rows.
    pub time_span: Option<TimeSpan>,

    pub style: FigureStyle,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(source: PathBuf) -> Self {
        Self {
            source,
            table: None,
            triangles: Vec::new(),
            time_span: None,
            style: FigureStyle::default(),
            status_message: None,
        }
    }

    /// Read `path`, make it the current source and ingest it.
    pub fn load(&mut self, path: &Path) {
        self.source = path.to_path_buf();
        match load_file(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows x {} columns from {}",
                    table.len(),
                    table.width(),
                    path.display()
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.clear();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-read the current source.
    pub fn reload(&mut self) {
        let source = self.source.clone();
        self.load(&source);
    }

    /// Ingest a table: select the trailing window and build triangles.
    pub fn set_table(&mut self, table: Table) {
        let result = trailing_window(&table, WINDOW_ROWS).and_then(|window| {
            if window.len() < WINDOW_ROWS {
                log::warn!(
                    "Table has only {} rows, drawing all of them",
                    window.len()
                );
            }
            triangles(window, table.len() - window.len())
        });

        match result {
            Ok(tris) => {
                self.time_span = TimeSpan::of(&tris);
                self.triangles = tris;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Cannot plot {}: {e}", self.source.display());
                self.triangles.clear();
                self.time_span = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.table = Some(table);
    }

    fn clear(&mut self) {
        self.table = None;
        self.triangles.clear();
        self.time_span = None;
    }
}
