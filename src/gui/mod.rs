//! GUI module - User interface components

mod app;
mod channel_form;
mod channel_table;
mod meter_view;

pub use app::RoiMeterApp;
pub use channel_form::{ChannelForm, FormAction};
pub use channel_table::{ChannelTable, TableAction};
pub use meter_view::{MeterAction, MeterView};
