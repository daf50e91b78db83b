//! Stats module - Derived ROI values and display formatting

mod band;
mod calculator;
mod format;

pub use band::ColorBand;
pub use calculator::RoiCalculator;
pub use format::{format_currency, format_percent};
