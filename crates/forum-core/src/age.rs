//! Relative age labels ("3 minutes ago") for records created at runtime.

use chrono::{DateTime, Utc};

/// Render the time elapsed between `then` and `now` the way listings show it.
///
/// Timestamps in the future are treated as "just now".
#[must_use]
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    let (value, unit) = match secs {
        0..=59 => return String::from("just now"),
        60..=3_599 => (secs / 60, "minute"),
        3_600..=86_399 => (secs / 3_600, "hour"),
        86_400..=2_591_999 => (secs / 86_400, "day"),
        2_592_000..=31_535_999 => (secs / 2_592_000, "month"),
        _ => (secs / 31_536_000, "year"),
    };

    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}
