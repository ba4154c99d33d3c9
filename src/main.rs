mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::TriadViewerApp;
use eframe::egui;

/// Table read when no path is given on the command line.
const DEFAULT_SOURCE: &str = "out";

fn main() -> eframe::Result {
    env_logger::init();

    let source = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
    log::info!("Reading trajectories from {}", source.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 800.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Triad Viewer",
        options,
        Box::new(|cc| Ok(Box::new(TriadViewerApp::new(cc, source)))),
    )
}
