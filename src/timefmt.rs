//! Relative time formatting for the library listing

use chrono::{DateTime, Utc};

/// Render how long ago `then` was, relative to `now`.
///
/// Matches the listing's wording: "just now" under a minute, then minutes,
/// hours and days with pluralisation.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    let mins = diff.num_minutes();
    if mins < 1 {
        return "just now".to_string();
    }
    if mins < 60 {
        return plural(mins, "minute");
    }
    let hours = mins / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(hours / 24, "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
