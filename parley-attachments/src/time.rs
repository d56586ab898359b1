//! Timestamp formatting for attachment cards.
//!
//! Messages from today show a bare clock time; anything older gets the
//! combined date-and-time form.

use chrono::{DateTime, Local, Utc};

const TIME_FORMAT: &str = "%H:%M";
const DATE_TIME_FORMAT: &str = "%B %e, %Y %H:%M";

/// Format `ts` relative to the local current day.
pub fn format(ts: DateTime<Utc>) -> String {
    format_at(ts, Local::now())
}

/// Core formatter with an explicit "now"; the branch depends solely on
/// calendar-day equality in local time.
pub fn format_at(ts: DateTime<Utc>, now: DateTime<Local>) -> String {
    let local = ts.with_timezone(&now.timezone());
    if local.date_naive() == now.date_naive() {
        local.format(TIME_FORMAT).to_string()
    } else {
        local.format(DATE_TIME_FORMAT).to_string()
    }
}
