// src/render/date.rs
// =============================================================================
// Relative dates for asset upload times.
//
// The day count is the elapsed time rounded UP to whole days, so anything
// older than "exactly now" already reads as "Yesterday". Timestamps in the
// future count the same as the past (absolute difference).
//
//   0 days      -> "Today"
//   1 day       -> "Yesterday"
//   2..=7 days  -> "N days ago"
//   older       -> "Oct 5" (short month + day, en-US, no year)
// =============================================================================

use chrono::{DateTime, Utc};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub fn format_date(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match days_between(created, now) {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        days @ 2..=7 => format!("{days} days ago"),
        _ => created.format("%b %-d").to_string(),
    }
}

// Whole days between two instants, rounded up
fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let elapsed_ms = (b - a).num_milliseconds().abs();
    (elapsed_ms + MS_PER_DAY - 1) / MS_PER_DAY
}
