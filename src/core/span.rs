//! Date spans produced by each pause template, and the daily cutoff.

use crate::errors::{AppError, AppResult};
use crate::models::template::PauseTemplate;
use crate::utils::time::hm;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Default cutoff for changing tomorrow's meals (18:00 local).
pub const DEFAULT_CUTOFF: NaiveTime = hm(18, 0);

pub fn default_cutoff() -> NaiveTime {
    DEFAULT_CUTOFF
}

pub fn deadline_passed(now: NaiveDateTime, cutoff: NaiveTime) -> bool {
    now.time() >= cutoff
}

pub fn add_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_add_days(Days::new(n)).unwrap_or(NaiveDate::MAX)
}

pub fn sub_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN)
}

/// Earliest date a new pause may start on.
///
/// Tomorrow while the cutoff has not passed, the day after tomorrow once it has.
pub fn min_start(now: NaiveDateTime, cutoff: NaiveTime) -> NaiveDate {
    let today = now.date();
    if deadline_passed(now, cutoff) {
        add_days(today, 2)
    } else {
        add_days(today, 1)
    }
}

/// First Friday strictly after `today`.
pub fn next_friday(today: NaiveDate) -> NaiveDate {
    let from_monday = today.weekday().num_days_from_monday();
    let friday = Weekday::Fri.num_days_from_monday();
    let ahead = (friday + 7 - from_monday) % 7;
    add_days(today, if ahead == 0 { 7 } else { ahead as u64 })
}

/// Compute the `(start, end)` span for a template.
///
/// `custom` must be supplied for [`PauseTemplate::Custom`] and is ignored
/// otherwise.
pub fn span_for(
    template: PauseTemplate,
    now: NaiveDateTime,
    custom: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    let today = now.date();

    match template {
        PauseTemplate::Tomorrow => Ok((add_days(today, 1), add_days(today, 2))),
        PauseTemplate::Weekend => {
            let friday = next_friday(today);
            Ok((friday, add_days(friday, 3)))
        }
        PauseTemplate::Custom => custom.ok_or_else(|| {
            AppError::MissingArgument("custom pauses need --start and --end".into())
        }),
    }
}
