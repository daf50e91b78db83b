//! Channel Form Widget
//! Add and edit forms shown above the main display.

use crate::data::{Channel, ChannelDraft};
use egui::{Color32, DragValue, Grid, RichText, TextEdit};

const FIELD_WIDTH: f32 = 180.0;
const LABEL_COLOR: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);
const SUBMIT_COLOR: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);
const CANCEL_COLOR: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Actions triggered by the add/edit forms
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    None,
    SubmitAdd,
    SaveEdit,
    CancelEdit,
}

pub struct ChannelForm;

impl ChannelForm {
    /// Draw the add-channel form over the raw draft text.
    pub fn show_add(ui: &mut egui::Ui, draft: &mut ChannelDraft) -> FormAction {
        let mut action = FormAction::None;

        Self::card(ui, |ui| {
            ui.label(RichText::new("Add New Channel").size(17.0).strong());
            ui.add_space(8.0);

            Grid::new("add_channel_form")
                .num_columns(3)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    Self::field_labels(ui);
                    ui.add(TextEdit::singleline(&mut draft.name).desired_width(FIELD_WIDTH));
                    ui.add(TextEdit::singleline(&mut draft.roi).desired_width(FIELD_WIDTH));
                    ui.add(TextEdit::singleline(&mut draft.spend).desired_width(FIELD_WIDTH));
                    ui.end_row();
                });

            ui.add_space(10.0);
            if ui.add(Self::filled_button("Add Channel", SUBMIT_COLOR)).clicked() {
                action = FormAction::SubmitAdd;
            }
        });

        action
    }

    /// Draw the edit form over the working copy of a channel.
    pub fn show_edit(ui: &mut egui::Ui, buffer: &mut Channel) -> FormAction {
        let mut action = FormAction::None;

        Self::card(ui, |ui| {
            ui.label(RichText::new(format!("Edit {}", buffer.name)).size(17.0).strong());
            ui.add_space(8.0);

            Grid::new("edit_channel_form")
                .num_columns(3)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    Self::field_labels(ui);
                    ui.add(TextEdit::singleline(&mut buffer.name).desired_width(FIELD_WIDTH));
                    ui.add_sized(
                        [FIELD_WIDTH, 20.0],
                        DragValue::new(&mut buffer.roi).speed(1.0).suffix("%"),
                    );
                    ui.add_sized(
                        [FIELD_WIDTH, 20.0],
                        DragValue::new(&mut buffer.spend).speed(50.0).prefix("$"),
                    );
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.add(Self::filled_button("Save Changes", SUBMIT_COLOR)).clicked() {
                    action = FormAction::SaveEdit;
                }
                ui.add_space(6.0);
                if ui.add(Self::filled_button("Cancel", CANCEL_COLOR)).clicked() {
                    action = FormAction::CancelEdit;
                }
            });
        });

        action
    }

    fn field_labels(ui: &mut egui::Ui) {
        for label in ["Channel Name", "ROI (%)", "Spend ($)"] {
            ui.label(RichText::new(label).size(12.0).color(LABEL_COLOR));
        }
        ui.end_row();
    }

    fn filled_button(text: &str, fill: Color32) -> egui::Button<'static> {
        egui::Button::new(RichText::new(text.to_string()).color(Color32::WHITE))
            .fill(fill)
            .min_size(egui::vec2(110.0, 30.0))
    }

    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
        ui.add_space(14.0);
    }
}
