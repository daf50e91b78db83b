//! Gauge Geometry
//! Maps a value onto a semicircular gauge in a 100x50 viewBox.
//!
//! Layout:
//! - background arc from (10,50) over the top to (90,50), radius 40
//! - foreground arc starting at (10,50), length driven by `rotation`
//! - needle from the hub at (50,50), length 38
//! - value label centered under the arc

use crate::stats::format_percent;
use std::fmt::Write;

/// Full-scale gauge value (600% ROI)
pub const DEFAULT_GAUGE_MAX: f64 = 600.0;

pub const BACKGROUND_PATH: &str = "M 10,50 A 40,40 0 0,1 90,50";

const TRACK_COLOR: &str = "#E5E7EB";
const NEEDLE_COLOR: &str = "#374151";
const ARC_STROKE: f64 = 8.0;
const NEEDLE_STROKE: f64 = 2.0;
const NEEDLE_LENGTH: f64 = 38.0;
const HUB_RADIUS: f64 = 4.0;

/// Derived drawing parameters for one gauge reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub value: f64,
    pub max: f64,
    /// Share of full scale, capped at 100. NaN input stays NaN.
    pub percentage: f64,
    /// Needle angle in degrees, 0..=180 for in-range values.
    pub rotation: f64,
    /// SVG large-arc flag for the foreground arc
    pub large_arc: bool,
    pub arc_end: (f64, f64),
    pub needle_end: (f64, f64),
}

impl GaugeGeometry {
    pub fn new(value: f64, max: f64) -> Self {
        let raw = value / max * 100.0;
        // `f64::min` would swallow NaN
        let percentage = if raw > 100.0 { 100.0 } else { raw };
        let rotation = percentage / 100.0 * 180.0;

        let radians = rotation.to_radians();
        let (sin, cos) = radians.sin_cos();

        Self {
            value,
            max,
            percentage,
            rotation,
            large_arc: rotation > 90.0,
            arc_end: (10.0 + 80.0 * sin, 50.0 - 40.0 * cos),
            needle_end: (50.0 + NEEDLE_LENGTH * sin, 50.0 - NEEDLE_LENGTH * cos),
        }
    }

    /// Foreground arc path data.
    pub fn foreground_path(&self) -> String {
        format!(
            "M 10,50 A 40,40 0 {},1 {},{}",
            u8::from(self.large_arc),
            svg_num(self.arc_end.0),
            svg_num(self.arc_end.1)
        )
    }

    /// Standalone SVG document for the gauge in the given stroke color.
    pub fn to_svg(&self, color: &str) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50">"#);
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            BACKGROUND_PATH,
            TRACK_COLOR,
            ARC_STROKE
        );
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            self.foreground_path(),
            color,
            ARC_STROKE
        );
        let _ = writeln!(
            svg,
            r#"  <line x1="50" y1="50" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            svg_num(self.needle_end.0),
            svg_num(self.needle_end.1),
            NEEDLE_COLOR,
            NEEDLE_STROKE
        );
        let _ = writeln!(
            svg,
            r#"  <circle cx="50" cy="50" r="{}" fill="{}"/>"#,
            HUB_RADIUS,
            NEEDLE_COLOR
        );
        let _ = writeln!(
            svg,
            r#"  <text x="50" y="35" text-anchor="middle" font-weight="bold" fill="{}">{}</text>"#,
            color,
            format_percent(self.value)
        );
        svg.push_str("</svg>\n");
        svg
    }
}

/// Coordinates rounded to 3 decimals with trailing zeros dropped.
fn svg_num(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
