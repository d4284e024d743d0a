//! Date and time formatting helpers.

use chrono::{DateTime, Month, TimeZone};
use std::fmt;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Describes the distance between two instants in words, e.g. `"about 3 hours"`.
///
/// The order of the arguments does not matter.
///
/// | Rounded minutes   | Output               |
/// |-------------------|----------------------|
/// | 0                 | `less than 1 minute` |
/// | 1 ..= 44          | `N minutes`          |
/// | 45 ..= 89         | `about 1 hour`       |
/// | 90 ..= 1439       | `about N hours`      |
/// | 1440 ..= 2519     | `about 1 day`        |
/// | 2520 ..= 43199    | `N days`             |
/// | 43200 ..= 86399   | `about 1 month`      |
/// | 86400 ..= 525599  | `N months`           |
/// | 525600 ..= 1051199| `about 1 year`       |
/// | more              | `N years`            |
pub fn distance_of_time_in_words<Tz: TimeZone, Uz: TimeZone>(
    from: &DateTime<Tz>,
    to: &DateTime<Uz>,
) -> String {
    let elapsed_ms = to.timestamp_millis() - from.timestamp_millis();
    let minutes = (elapsed_ms as f64).abs() / 60_000.0;
    let rounded = minutes.round() as i64;

    match rounded {
        0 => "less than 1 minute".to_string(),
        1 => "1 minute".to_string(),
        2..=44 => format!("{} minutes", rounded),
        45..=89 => "about 1 hour".to_string(),
        90..=1439 => format!("about {} hours", (minutes / 60.0).round() as i64),
        1440..=2519 => "about 1 day".to_string(),
        2520..=43199 => format!("{} days", (minutes / MINUTES_PER_DAY).round() as i64),
        43200..=86399 => "about 1 month".to_string(),
        86400..=525599 => format!("{} months", (minutes / MINUTES_PER_DAY / 30.0).round() as i64),
        525600..=1051199 => "about 1 year".to_string(),
        _ => format!("{} years", (minutes / MINUTES_PER_DAY / 365.0).round() as i64),
    }
}

/// Formats a date like `July 3, 2016`.
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    time.format("%B %-d, %Y").to_string()
}

/// Formats a date and minute like `July 3, 2016 12:34`.
pub fn format_time_with_minute<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    time.format("%B %-d, %Y %H:%M").to_string()
}

/// Formats a month and year like `July 2016`.
pub fn format_time_year_month<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    time.format("%B %Y").to_string()
}

/// Returns the English name of a month.
pub fn month_name(month: Month) -> &'static str {
    month.name()
}
