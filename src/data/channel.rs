//! Channel Model
//! Marketing channel records and the raw add-form draft.

use serde::{Deserialize, Serialize};

/// Unique channel identifier within a store.
pub type ChannelId = u64;

/// A single marketing channel: ROI percentage and spend in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub roi: f64,
    pub spend: f64,
}

impl Channel {
    pub fn new(id: ChannelId, name: impl Into<String>, roi: f64, spend: f64) -> Self {
        Self {
            id,
            name: name.into(),
            roi,
            spend,
        }
    }
}

/// Sample channels shown on first launch.
pub fn default_channels() -> Vec<Channel> {
    vec![
        Channel::new(1, "Social Media", 320.0, 15000.0),
        Channel::new(2, "Email Marketing", 450.0, 8000.0),
        Channel::new(3, "Content Marketing", 280.0, 12000.0),
        Channel::new(4, "PPC", 220.0, 20000.0),
        Channel::new(5, "SEO", 510.0, 10000.0),
    ]
}

/// Next free id: one past the largest id, 1 for an empty list.
/// Gaps left by deletions are never reused, so `None` once the largest
/// id is `ChannelId::MAX`.
pub fn next_channel_id(channels: &[Channel]) -> Option<ChannelId> {
    channels.iter().map(|c| c.id).max().unwrap_or(0).checked_add(1)
}

/// Raw text of the add-channel form.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDraft {
    pub name: String,
    pub roi: String,
    pub spend: String,
}

impl Default for ChannelDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            roi: "0".to_string(),
            spend: "0".to_string(),
        }
    }
}

impl ChannelDraft {
    /// True when the name is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Build a channel from the draft, coercing the numeric fields.
    pub fn to_channel(&self, id: ChannelId) -> Channel {
        Channel {
            id,
            name: self.name.clone(),
            roi: coerce_number(&self.roi),
            spend: coerce_number(&self.spend),
        }
    }
}

/// Lenient text-to-number conversion for form input.
///
/// Blank text is zero, anything unparseable is NaN.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
