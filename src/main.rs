mod app;
mod canvas;
mod controller;
mod coordinate;
mod error;
mod grid;
mod marker;
mod settings;
mod store;
mod ui;

use app::StarMapperApp;
use settings::Settings;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load().unwrap_or_else(|err| {
        warn!(%err, "could not load settings, using defaults");
        Settings::default()
    });

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 800.0)),
        min_window_size: Some(egui::vec2(960.0, 720.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Star Mapper",
        native_options,
        Box::new(move |cc| Box::new(StarMapperApp::new(cc, settings))),
    )
}
