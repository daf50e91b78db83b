//! Channel Table Widget
//! Lists every channel with ROI badge, spend, return, and row actions.

use crate::data::{Channel, ChannelId};
use crate::stats::{format_currency, format_percent, ColorBand, RoiCalculator};
use egui::{Color32, Grid, Margin, RichText};

const HEADER_COLOR: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);
const EDIT_COLOR: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
const DELETE_COLOR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Actions triggered from a table row
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    None,
    Select(ChannelId),
    Edit(ChannelId),
    Delete(ChannelId),
}

pub struct ChannelTable;

impl ChannelTable {
    /// Draw the table. Clicking a channel name selects it; Delete is
    /// disabled unless `can_delete`.
    pub fn show(
        ui: &mut egui::Ui,
        channels: &[Channel],
        selected: ChannelId,
        can_delete: bool,
    ) -> TableAction {
        let mut action = TableAction::None;

        ui.label(RichText::new("Marketing Channels").size(15.0).strong());
        ui.add_space(6.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                Grid::new("channel_table")
                    .num_columns(5)
                    .striped(true)
                    .spacing([28.0, 10.0])
                    .show(ui, |ui| {
                        for header in ["CHANNEL", "ROI", "SPEND", "RETURN", "ACTIONS"] {
                            ui.label(RichText::new(header).size(11.0).color(HEADER_COLOR));
                        }
                        ui.end_row();

                        for channel in channels {
                            let is_selected = channel.id == selected;
                            if ui
                                .selectable_label(is_selected, RichText::new(&channel.name).strong())
                                .clicked()
                            {
                                action = TableAction::Select(channel.id);
                            }

                            Self::roi_badge(ui, channel.roi);

                            ui.label(format_currency(channel.spend));
                            ui.label(format_currency(RoiCalculator::compute_return(
                                channel.roi,
                                channel.spend,
                            )));

                            ui.horizontal(|ui| {
                                let edit = egui::Button::new(RichText::new("Edit").color(EDIT_COLOR))
                                    .frame(false);
                                if ui.add(edit).clicked() {
                                    action = TableAction::Edit(channel.id);
                                }

                                let delete =
                                    egui::Button::new(RichText::new("Delete").color(DELETE_COLOR))
                                        .frame(false);
                                if ui.add_enabled(can_delete, delete).clicked() {
                                    action = TableAction::Delete(channel.id);
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

        action
    }

    /// Pill-shaped ROI label tinted with the band color.
    fn roi_badge(ui: &mut egui::Ui, roi: f64) {
        let band = ColorBand::from_roi(roi);
        egui::Frame::none()
            .fill(band.badge_fill())
            .rounding(10.0)
            .inner_margin(Margin::symmetric(8.0, 2.0))
            .show(ui, |ui| {
                ui.label(RichText::new(format_percent(roi)).color(band.color()));
            })
            .response
            .on_hover_text(band.label());
    }
}
