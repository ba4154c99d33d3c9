use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::window::WINDOW_ROWS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – window summary and legend
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Window");
    ui.separator();

    ui.strong("Source");
    ui.label(state.source.display().to_string());
    ui.add_space(4.0);

    if state.triangles.is_empty() {
        ui.label("No rows to draw.");
        return;
    }

    ui.strong("Rows");
    ui.label(window_label(state.triangles.len()));
    ui.add_space(4.0);

    if let Some(span) = state.time_span {
        ui.strong("Time");
        ui.label(format!("t = {:.2} … {:.2}", span.start, span.end));
        ui.add_space(4.0);
    }

    ui.separator();
    ui.strong("Bodies");
    for (label, color) in state.style.legend_entries() {
        ui.label(RichText::new(format!("● {label}")).color(color));
    }
}

/// Row count of the drawn window next to the fixed window size.
fn window_label(rows: usize) -> String {
    format!("{rows} rows (window {WINDOW_ROWS})")
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows loaded, {} in window",
                table.len(),
                state.triangles.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Open trajectory table");
    if let Some(dir) = state.source.parent().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        state.load(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_label_shows_drawn_rows_and_window_size() {
        assert_eq!(window_label(5), "5 rows (window 34)");
        assert_eq!(window_label(WINDOW_ROWS), "34 rows (window 34)");
    }
}
