//! ROI Meter Main Application
//! Single window with add/edit forms, the gauge display, and the channel table.

use crate::config::AppConfig;
use crate::data::{ChannelStore, Mode, StoreError};
use crate::gui::{ChannelForm, ChannelTable, FormAction, MeterAction, MeterView, TableAction};
use egui::{Color32, RichText};

const TOGGLE_COLOR: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Main application window.
pub struct RoiMeterApp {
    store: ChannelStore,
    gauge_max: f64,
}

impl RoiMeterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let store = config.build_store();
        tracing::info!(channels = store.len(), gauge_max = config.gauge_max, "ROI meter ready");
        Self {
            store,
            gauge_max: config.gauge_max,
        }
    }

    /// Header button: open or close the add form
    fn handle_toggle_add_form(&mut self) {
        self.store.toggle_add_form();
        tracing::debug!(mode = ?self.store.mode(), "Toggled add form");
    }

    fn handle_table_action(&mut self, action: TableAction) {
        let result = match action {
            TableAction::None => return,
            TableAction::Select(id) => self.store.select(id).map(|changed| {
                if changed {
                    tracing::debug!(id, "Selected channel");
                }
            }),
            TableAction::Edit(id) => self.store.begin_edit(id),
            TableAction::Delete(id) => self.store.delete_channel(id).map(|removed| {
                tracing::info!(id, name = %removed.name, "Deleted channel");
            }),
        };

        if let Err(e) = result {
            Self::log_rejection(&e);
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        let result = match action {
            FormAction::None => return,
            FormAction::SubmitAdd => self.store.add_channel().map(|id| {
                tracing::info!(id, "Added channel");
            }),
            FormAction::SaveEdit => self.store.save_edit().map(|id| {
                tracing::info!(id, "Saved channel edit");
            }),
            FormAction::CancelEdit => {
                self.store.cancel_edit();
                Ok(())
            }
        };

        if let Err(e) = result {
            Self::log_rejection(&e);
        }
    }

    fn handle_meter_action(ctx: &egui::Context, action: MeterAction) {
        if let MeterAction::CopySvg(svg) = action {
            ctx.copy_text(svg);
            tracing::debug!("Copied gauge SVG to clipboard");
        }
    }

    /// Rejected actions are silent in the UI
    fn log_rejection(error: &StoreError) {
        match error {
            StoreError::EmptyName | StoreError::LastChannel => {
                tracing::debug!("Ignored action: {}", error)
            }
            _ => tracing::warn!("Rejected action: {}", error),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Marketing Channel ROI").size(24.0).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match self.store.mode() {
                    Mode::Adding(_) => "Cancel",
                    _ => "Add Channel",
                };
                let button = egui::Button::new(RichText::new(label).color(Color32::WHITE))
                    .fill(TOGGLE_COLOR)
                    .min_size(egui::vec2(100.0, 28.0));
                if ui.add(button).clicked() {
                    self.handle_toggle_add_form();
                }
            });
        });
        ui.add_space(16.0);
    }
}

impl eframe::App for RoiMeterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_header(ui);

                    let form_action = if let Some(draft) = self.store.draft_mut() {
                        ChannelForm::show_add(ui, draft)
                    } else if let Some(buffer) = self.store.edit_buffer_mut() {
                        ChannelForm::show_edit(ui, buffer)
                    } else {
                        FormAction::None
                    };
                    self.handle_form_action(form_action);

                    // The edit form takes the place of the gauge display
                    if !self.store.is_editing() {
                        let action = MeterView::show(ui, self.store.selected(), self.gauge_max);
                        Self::handle_meter_action(ctx, action);
                    }

                    let table_action = ChannelTable::show(
                        ui,
                        self.store.channels(),
                        self.store.selected_id(),
                        self.store.can_delete(),
                    );
                    self.handle_table_action(table_action);
                });
        });
    }
}
