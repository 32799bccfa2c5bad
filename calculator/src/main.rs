//! Modern Calculator
//!
//! Keypad calculator: digits, decimal point, + - × ÷, percent, backspace.

use calccore::config::{self, CalcConfig, LoadOutcome};
use calculator::app::CalculatorApp;
use eframe::NativeOptions;
use tracing::{info, warn};

fn main() -> eframe::Result<()> {
    let path = config::config_path();
    let (config, outcome) = CalcConfig::load_or_default(&path);

    calccore::logging::init(&config.log_level);
    outcome.report(&path);
    if matches!(outcome, LoadOutcome::Missing) {
        match config.save(&path) {
            Ok(()) => info!(path = %path.display(), "wrote default config"),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not write default config")
            }
        }
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(config.window.resizable)
            .with_title("Modern Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| Box::new(CalculatorApp::new(cc, &config))),
    )
}
