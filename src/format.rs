//! Display helpers for durations, times of day and dates

use std::{convert::TryFrom, fmt::Display};

use chrono::Month;

/// Width used by [format_time] for both fields
pub const DEFAULT_PAD_WIDTH: usize = 2;

/// Format an uptime in milliseconds, keeping the most significant non-zero unit
/// and the one (or two, for days) below it
pub fn format_uptime(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h {}m", days, hours % 24, minutes % 60)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

/// Left-pad the decimal form of `num` with zeros up to `size` characters.
///
/// Longer inputs are returned unchanged.
pub fn pad_zero(num: impl Display, size: usize) -> String {
    format!("{:0>width$}", num.to_string(), width = size)
}

/// Format a time of day as `HH:MM`
pub fn format_time(hours: u32, minutes: u32) -> String {
    format!(
        "{}:{}",
        pad_zero(hours, DEFAULT_PAD_WIDTH),
        pad_zero(minutes, DEFAULT_PAD_WIDTH)
    )
}

/// English name of a 1-indexed month, or an empty string when out of range
pub fn month_name(month: i32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .map(|month| month.name())
        .unwrap_or("")
}
