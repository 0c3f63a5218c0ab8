//! Workout Log - a small desktop log for workout distances by date.

mod core;
mod gui;

use crate::core::config::AppSettings;
use gui::WorkoutLogApp;

fn main() -> eframe::Result<()> {
    let settings = AppSettings::load();
    let (width, height) = settings.window_size.unwrap_or((520.0, 640.0));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Workout Log",
        options,
        Box::new(move |cc| Ok(Box::new(WorkoutLogApp::new(cc, settings)))),
    )
}
