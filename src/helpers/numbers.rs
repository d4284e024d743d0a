//! Number formatting helpers.

use rand::Rng;
use std::time::Duration;

/// Converts meters to kilometers.
pub fn in_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Inserts `delimiter` between every group of three digits.
///
/// # Example
///
/// ```rust
/// use stemplate::helpers::number_with_delimiter;
///
/// assert_eq!(number_with_delimiter(',', 1234567), "1,234,567");
/// ```
pub fn number_with_delimiter(delimiter: char, n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(delimiter);
        }
        out.push(c);
    }

    out
}

/// Rounds to the nearest integer, with halves rounded away from zero.
pub fn round(x: f64) -> f64 {
    x.round()
}

/// Formats a number with exactly one decimal place.
pub fn round_to_string(x: f64) -> String {
    format!("{:.1}", x)
}

/// Formats the time taken per kilometer as `m:ss`.
///
/// Seconds are truncated. A distance that is zero, negative or not a number
/// has no meaningful pace and renders as `-:--`.
pub fn pace(meters: f64, duration: Duration) -> String {
    if meters.is_nan() || meters <= 0.0 {
        return "-:--".to_string();
    }

    let seconds_per_km = (duration.as_secs_f64() / in_km(meters)) as u64;
    format!("{}:{:02}", seconds_per_km / 60, seconds_per_km % 60)
}

/// Returns a uniformly distributed integer in `[0, n)`, or 0 when `n <= 1`.
pub fn rand_intn(n: i64) -> i64 {
    if n <= 1 {
        return 0;
    }
    rand::thread_rng().gen_range(0..n)
}

/// Renders a star rating as a run of `★ ` glyphs.
pub fn to_stars(n: usize) -> String {
    "★ ".repeat(n)
}
