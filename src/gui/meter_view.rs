//! Meter View Widget
//! Gauge for the selected channel plus Investment / Return / Net Profit cards.

use crate::charts::{GaugeGeometry, GaugePainter};
use crate::data::Channel;
use crate::stats::{format_currency, ColorBand, RoiCalculator};
use egui::{Color32, RichText};

const GAUGE_WIDTH: f32 = 260.0;
const CARD_LABEL_COLOR: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Actions triggered from the meter view
#[derive(Debug, Clone, PartialEq)]
pub enum MeterAction {
    None,
    /// Put the gauge SVG on the clipboard
    CopySvg(String),
}

pub struct MeterView;

impl MeterView {
    pub fn show(ui: &mut egui::Ui, channel: &Channel, gauge_max: f64) -> MeterAction {
        let mut action = MeterAction::None;

        let band = ColorBand::from_roi(channel.roi);
        let geometry = GaugeGeometry::new(channel.roi, gauge_max);
        let summary = RoiCalculator::summarize(channel);

        ui.columns(2, |columns| {
            columns[0].vertical_centered(|ui| {
                GaugePainter::draw(ui, &geometry, band.color(), GAUGE_WIDTH);
                ui.label(RichText::new(&channel.name).size(17.0).strong());
                if ui
                    .small_button("Copy SVG")
                    .on_hover_text("Copy this gauge as an SVG document")
                    .clicked()
                {
                    action = MeterAction::CopySvg(geometry.to_svg(&band.hex()));
                }
            });

            columns[1].vertical(|ui| {
                ui.add_space(10.0);
                Self::summary_card(ui, "Investment", summary.investment);
                Self::summary_card(ui, "Return", summary.total_return);
                Self::summary_card(ui, "Net Profit", summary.net_profit);
            });
        });

        ui.add_space(14.0);
        action
    }

    fn summary_card(ui: &mut egui::Ui, title: &str, value: f64) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).size(12.0).color(CARD_LABEL_COLOR));
                ui.label(RichText::new(format_currency(value)).size(20.0).strong());
            });
        ui.add_space(8.0);
    }
}
