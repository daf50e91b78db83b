//! Data module - Channel records and the in-memory store

mod channel;
mod store;

pub use channel::{default_channels, Channel, ChannelDraft, ChannelId};
pub use store::{ChannelStore, Mode, StoreError};
