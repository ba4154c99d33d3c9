use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TriadViewerApp {
    pub state: AppState,
}

impl TriadViewerApp {
    /// Build the app and load `source` once, before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, source: PathBuf) -> Self {
        // Translucent black outlines need a light background.
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut state = AppState::new(source.clone());
        state.load(&source);
        Self { state }
    }
}

impl eframe::App for TriadViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: window summary ----
        egui::SidePanel::left("window_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::triangle_plot(ui, &self.state);
        });
    }
}
