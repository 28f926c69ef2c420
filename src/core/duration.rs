//! Approximate elapsed-time rendering
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for the /twitch stream-time field

use chrono::Duration;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Render an elapsed duration as a single rounded unit, e.g. "2 hours".
///
/// The largest unit with a whole value of at least one is chosen, then the
/// duration is rounded to the nearest whole multiple of that unit: 119
/// minutes renders as "2 hours", not "1 hour 59 minutes". Negative
/// durations (clock skew against the upstream timestamp) clamp to zero.
pub fn humanize_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);

    let (count, unit) = if secs >= DAY {
        (round_div(secs, DAY), "day")
    } else if secs >= HOUR {
        (round_div(secs, HOUR), "hour")
    } else if secs >= MINUTE {
        (round_div(secs, MINUTE), "minute")
    } else {
        (secs, "second")
    };

    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Integer division rounded to the nearest whole quotient.
fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}
