use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::{body_label, EDGE_WIDTH, ORIGIN_MARKER_SIZE, VERTEX_MARKER_SIZE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Triangle plot (central panel)
// ---------------------------------------------------------------------------

/// Render the trailing-window triangles in the central panel.
pub fn triangle_plot(ui: &mut Ui, state: &AppState) {
    if state.triangles.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            let hint = match &state.status_message {
                Some(_) => "Nothing to plot, see the error above",
                None => "Open a file to view trajectories  (File → Open…)",
            };
            ui.heading(hint);
        });
        return;
    }

    let style = &state.style;

    Plot::new("triangle_plot")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_grid(true)
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for tri in &state.triangles {
                let outline: PlotPoints = tri.closed_polyline().into_iter().collect();
                plot_ui.line(Line::new(outline).color(style.edge).width(EDGE_WIDTH));

                // Same name on every row so the legend shows one entry per body.
                for (i, (vertex, color)) in tri.vertices.iter().zip(style.vertices).enumerate() {
                    plot_ui.points(
                        Points::new(vec![*vertex])
                            .name(body_label(i))
                            .color(color)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(VERTEX_MARKER_SIZE / 2.0),
                    );
                }
            }

            plot_ui.points(
                Points::new(vec![[0.0, 0.0]])
                    .name("origin")
                    .color(style.origin)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(ORIGIN_MARKER_SIZE / 2.0),
            );
        });
}
