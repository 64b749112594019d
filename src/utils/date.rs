use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_date(s)).transpose()
}

/// "Fri 2025-03-14"
pub fn weekday_label(d: NaiveDate) -> String {
    let wd = match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    };
    format!("{} {}", wd, d.format("%Y-%m-%d"))
}
