//! Gauge Painter Module
//! Draws the ROI dial with the egui painter.
//!
//! The dial measures angles from its left end, so a reading of 0 sits at the
//! left and full scale at the right. `GaugeGeometry`'s needle (the SVG export)
//! measures the same `rotation` from vertical, which puts it 90° ahead of the
//! dial: at 0 the SVG needle points straight up.

use crate::charts::GaugeGeometry;
use crate::stats::format_percent;
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke};

const TRACK_COLOR: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
const NEEDLE_COLOR: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
const CAPTION_COLOR: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Segments used to approximate a half circle
const ARC_SEGMENTS: usize = 64;

/// Draws a semicircular gauge into an egui `Ui`.
pub struct GaugePainter;

impl GaugePainter {
    /// Point on the dial at `degrees` (0 = left end, 90 = top, 180 = right end).
    ///
    /// This is not the SVG needle's convention: `GaugeGeometry::needle_end`
    /// for rotation `r` lies in the direction of `dial_point` at `r + 90`.
    pub fn dial_point(center: Pos2, radius: f32, degrees: f64) -> Pos2 {
        let phi = (180.0 - degrees).to_radians() as f32;
        pos2(center.x + radius * phi.cos(), center.y - radius * phi.sin())
    }

    /// Polyline along the dial from 0 to `sweep` degrees.
    fn arc_points(center: Pos2, radius: f32, sweep: f64) -> Vec<Pos2> {
        let steps = ((sweep / 180.0) * ARC_SEGMENTS as f64).ceil().max(1.0) as usize;
        (0..=steps)
            .map(|i| Self::dial_point(center, radius, sweep * i as f64 / steps as f64))
            .collect()
    }

    /// Draw the gauge for `geometry` in `color`, sized to `width`.
    pub fn draw(ui: &mut egui::Ui, geometry: &GaugeGeometry, color: Color32, width: f32) {
        let height = width * 0.62;
        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        let painter = ui.painter_at(rect);

        let stroke_width = width * 0.08;
        let radius = width * 0.4;
        let center = pos2(rect.center().x, rect.top() + radius + stroke_width / 2.0);

        painter.add(Shape::line(
            Self::arc_points(center, radius, 180.0),
            Stroke::new(stroke_width, TRACK_COLOR),
        ));

        // Out-of-range readings still draw inside the dial
        let sweep = if geometry.rotation.is_finite() {
            geometry.rotation.clamp(0.0, 180.0)
        } else {
            0.0
        };

        if sweep > 0.0 {
            painter.add(Shape::line(
                Self::arc_points(center, radius, sweep),
                Stroke::new(stroke_width, color),
            ));
        }

        let needle_tip = Self::dial_point(center, radius * 0.95, sweep);
        painter.line_segment([center, needle_tip], Stroke::new(width * 0.02, NEEDLE_COLOR));
        painter.circle_filled(center, width * 0.04, NEEDLE_COLOR);

        painter.text(
            pos2(center.x, center.y - radius * 0.45),
            Align2::CENTER_CENTER,
            format_percent(geometry.value),
            FontId::proportional(width * 0.13),
            color,
        );
        painter.text(
            pos2(center.x, center.y + stroke_width),
            Align2::CENTER_TOP,
            "ROI",
            FontId::proportional(width * 0.055),
            CAPTION_COLOR,
        );

        response.on_hover_text(format!(
            "{:.0}% of full scale ({})",
            geometry.percentage,
            format_percent(geometry.max)
        ));
    }
}
