//! Application configuration
//!
//! Compiled-in defaults, optionally overridden by a JSON file named in the
//! `ROI_METER_CONFIG` environment variable. Missing keys keep their defaults.

use crate::charts::DEFAULT_GAUGE_MAX;
use crate::data::{default_channels, Channel, ChannelStore};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "ROI_METER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// ROI value shown as a full gauge
    pub gauge_max: f64,
    /// Channels loaded at startup
    pub channels: Vec<Channel>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [960.0, 820.0],
            min_window_size: [720.0, 600.0],
            gauge_max: DEFAULT_GAUGE_MAX,
            channels: default_channels(),
        }
    }
}

impl AppConfig {
    /// Load from `ROI_METER_CONFIG`, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            tracing::debug!("{} not set, using default config", CONFIG_ENV);
            return Self::default();
        };

        match Self::load_from(Path::new(&path)) {
            Ok(config) => {
                tracing::info!(path = ?path, channels = config.channels.len(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("Falling back to default config: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and sanitize a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        Ok(config.sanitized())
    }

    /// Replace unusable values with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.gauge_max.is_finite() || self.gauge_max <= 0.0 {
            tracing::warn!(gauge_max = self.gauge_max, "Invalid gauge_max, using default");
            self.gauge_max = defaults.gauge_max;
        }

        if let Err(e) = ChannelStore::new(self.channels.clone()) {
            tracing::warn!("Invalid channel list ({}), using sample channels", e);
            self.channels = defaults.channels;
        }

        self
    }

    /// Store seeded from the configured channels.
    pub fn build_store(&self) -> ChannelStore {
        ChannelStore::new(self.channels.clone()).unwrap_or_else(|e| {
            tracing::warn!("Invalid channel list ({}), using sample channels", e);
            ChannelStore::sample()
        })
    }
}
