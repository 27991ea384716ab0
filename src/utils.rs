//! General utilities.

use std::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone};

/// Current local time, respecting `SOURCE_DATE_EPOCH`.
///
/// When `SOURCE_DATE_EPOCH` is set, returns that instant instead of the actual
/// current time. This keeps rendered clocks deterministic in tests.
pub fn get_now() -> DateTime<Local> {
    std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|val| val.parse::<i64>().ok())
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .unwrap_or_else(Local::now)
}

/// Format `time` with a strftime pattern. Invalid patterns yield `None`.
pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>, pattern: &str) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    match write!(out, "{}", time.format(pattern)) {
        Ok(()) => Some(out),
        Err(_) => {
            log::debug!("Invalid date_time_format {:?}", pattern);
            None
        }
    }
}
