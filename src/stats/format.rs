//! Display formatting for currency and percentages.

use num_format::{Locale, ToFormattedString};

/// Format as whole US dollars with thousands separators, e.g. `$15,000`.
///
/// Rounds half away from zero. Non-finite input is shown rather than
/// hidden: `$NaN`, `$∞`, `-$∞`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }

    let rounded = value.round();
    if rounded == 0.0 {
        return "$0".to_string();
    }

    let abs = rounded.abs();
    let sign = if rounded < 0.0 { "-" } else { "" };
    // Beyond u128 the digits are printed ungrouped
    let digits = if abs <= u128::MAX as f64 {
        (abs as u128).to_formatted_string(&Locale::en)
    } else {
        format!("{:.0}", abs)
    };
    format!("{}${}", sign, digits)
}

/// Format an ROI value for the gauge label and table badge, e.g. `320%`.
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞%" } else { "-∞%" }.to_string();
    }
    if value == 0.0 {
        return "0%".to_string();
    }
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{}%", value)
    }
}
