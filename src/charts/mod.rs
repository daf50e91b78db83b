//! Charts module - ROI gauge geometry and rendering

mod gauge;
mod painter;

pub use gauge::{GaugeGeometry, DEFAULT_GAUGE_MAX};
pub use painter::GaugePainter;
