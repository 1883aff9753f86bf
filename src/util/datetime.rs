//! Localized date formatting for history cards.
//!
//! The label format is a fixed contract: `{день} {мес} в {ЧЧ:ММ}` with
//! Russian month abbreviations, a 24-hour clock, and no year.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, Datelike, TimeZone, Timelike};

const MONTHS_RU: [&str; 12] = [
    "янв", "фев", "мар", "апр", "мая", "июн",
    "июл", "авг", "сен", "окт", "ноя", "дек",
];

/// Format a timestamp in the datetime's own timezone, e.g. `6 авг в 09:05`.
pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {} в {:02}:{:02}",
        dt.day(),
        MONTHS_RU[dt.month0() as usize],
        dt.hour(),
        dt.minute()
    )
}
