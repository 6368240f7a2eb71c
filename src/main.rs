#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use shape_canvas::{CanvasApp, ToolSettings};

/// Reads tool settings from the JSON file named on the command line, if any
fn settings_from_args() -> Option<ToolSettings> {
    let path = std::env::args().nth(1)?;
    let loaded = std::fs::read_to_string(&path)
        .map_err(|err| err.to_string())
        .and_then(|json| ToolSettings::from_json(&json).map_err(|err| err.to_string()));
    match loaded {
        Ok(settings) => {
            log::info!("Loaded tool settings from {}", path);
            Some(settings)
        }
        Err(err) => {
            log::error!("Ignoring settings file {}: {}", path, err);
            None
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let settings = settings_from_args();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shape Canvas",
        native_options,
        Box::new(move |cc| Ok(Box::new(CanvasApp::new(cc, settings)))),
    )
}
