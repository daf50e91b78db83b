//! ROI Color Bands
//! Maps an ROI percentage to one of four fixed performance bands.

use egui::Color32;

/// Band thresholds, highest first
pub const EXCELLENT_MIN: f64 = 400.0;
pub const GOOD_MIN: f64 = 300.0;
pub const AVERAGE_MIN: f64 = 200.0;

/// Alpha used for the translucent badge background
const BADGE_ALPHA: u8 = 0x20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorBand {
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl ColorBand {
    /// Classify an ROI value. NaN falls through to `BelowAverage`.
    pub fn from_roi(roi: f64) -> Self {
        if roi >= EXCELLENT_MIN {
            ColorBand::Excellent
        } else if roi >= GOOD_MIN {
            ColorBand::Good
        } else if roi >= AVERAGE_MIN {
            ColorBand::Average
        } else {
            ColorBand::BelowAverage
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            ColorBand::Excellent => Color32::from_rgb(0x34, 0xD3, 0x99), // Green
            ColorBand::Good => Color32::from_rgb(0x60, 0xA5, 0xFA),      // Blue
            ColorBand::Average => Color32::from_rgb(0xFB, 0xBF, 0x24),   // Yellow
            ColorBand::BelowAverage => Color32::from_rgb(0xF8, 0x71, 0x71), // Red
        }
    }

    /// CSS-style hex string, used by the SVG export.
    pub fn hex(self) -> String {
        let [r, g, b, _] = self.color().to_array();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Band color at low opacity, for the ROI badge background.
    pub fn badge_fill(self) -> Color32 {
        let [r, g, b, _] = self.color().to_array();
        Color32::from_rgba_unmultiplied(r, g, b, BADGE_ALPHA)
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorBand::Excellent => "Excellent",
            ColorBand::Good => "Good",
            ColorBand::Average => "Average",
            ColorBand::BelowAverage => "Below average",
        }
    }
}
