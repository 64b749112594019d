//! Time utilities: parsing HH:MM and the `--now` override.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

/// `HH:MM` as a compile-time constant; out-of-range literals fail the build.
pub const fn hm(h: u32, m: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(h, m, 0) {
        Some(t) => t,
        None => panic!("hour or minute out of range"),
    }
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Accepts `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_datetime(s)).transpose()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
