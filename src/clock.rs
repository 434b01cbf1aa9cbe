//! # Timestamp Formatting
//!
//! Small formatting helpers for the timestamps a CI run produces: the
//! wall-clock time a step started, how long it took, and the
//! nanosecond-resolution counters some build tools report.
//!
//! All three helpers are pure; none of them touches the system clock.

use chrono::{DateTime, Local, TimeZone};

/// Format a timestamp as `HH:mm:ss` local wall-clock time.
///
/// Each field is zero-padded to two digits.
pub fn hhmmss(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Format the elapsed time between two timestamps as seconds with exactly
/// three digits after the decimal point, e.g. `"1.500"`.
///
/// The end timestamp is expected to be at or after the begin timestamp,
/// but this is not enforced; an earlier end produces a negative string.
pub fn elapsed<Tz: TimeZone>(begin: &DateTime<Tz>, end: &DateTime<Tz>) -> String {
    let millis = end.clone().signed_duration_since(begin.clone()).num_milliseconds();
    format!("{:.3}", millis as f64 / 1000.0)
}

/// Format a nanosecond epoch count as `"<seconds>.<nanoseconds>"` with a
/// fixed nine-digit fractional part, e.g. `"1694535491.104939637"`.
///
/// Values below one second format with a zero seconds part, so the output
/// is well-formed for any input.
pub fn nanos(value: u128) -> String {
    let seconds = value / 1_000_000_000;
    let remainder = value % 1_000_000_000;
    format!("{seconds}.{remainder:09}")
}
