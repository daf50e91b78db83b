//! ROI Meter - Editable Marketing Channel ROI Gauge
//!
//! A desktop widget for tracking marketing channels and visualizing their
//! return on investment.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use config::AppConfig;
use eframe::egui;
use gui::RoiMeterApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Set up logging, RUST_LOG overrides the default level
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title("Marketing Channel ROI"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ROI Meter",
        options,
        Box::new(move |cc| Ok(Box::new(RoiMeterApp::new(cc, &config)))),
    )
}
