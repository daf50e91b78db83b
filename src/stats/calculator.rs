//! ROI Calculator Module
//! Return and profit figures derived from a channel's ROI and spend.

use crate::data::Channel;

/// Figures shown on the three summary cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSummary {
    pub investment: f64,
    pub total_return: f64,
    pub net_profit: f64,
}

/// Stateless ROI arithmetic.
pub struct RoiCalculator;

impl RoiCalculator {
    /// Gross return for a spend at the given ROI percentage.
    pub fn compute_return(roi: f64, spend: f64) -> f64 {
        spend * (roi / 100.0)
    }

    /// Return minus the original spend.
    pub fn net_profit(roi: f64, spend: f64) -> f64 {
        Self::compute_return(roi, spend) - spend
    }

    pub fn summarize(channel: &Channel) -> ChannelSummary {
        ChannelSummary {
            investment: channel.spend,
            total_return: Self::compute_return(channel.roi, channel.spend),
            net_profit: Self::net_profit(channel.roi, channel.spend),
        }
    }
}
