//! Static mess calendar: serving windows and edit deadlines per meal.

use crate::models::meal_kind::MealKind;
use crate::utils::time::hm;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Length of the "ending soon" window before a meal stops being served.
pub const ENDING_SOON_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealTiming {
    pub serving_start: NaiveTime,
    pub serving_end: NaiveTime,
    /// Same-day cutoff before which a pause for today may still be cancelled.
    pub edit_deadline: NaiveTime,
}

impl MealTiming {
    pub fn duration(&self) -> Duration {
        self.serving_end - self.serving_start
    }

    pub fn ending_soon_from(&self) -> NaiveTime {
        self.serving_end - Duration::minutes(ENDING_SOON_MINUTES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MealStatus {
    NotStarted,
    Started,
    EndingSoon,
    Ended,
}

impl MealStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MealStatus::NotStarted => "Not started",
            MealStatus::Started => "Started",
            MealStatus::EndingSoon => "Ending soon",
            MealStatus::Ended => "Ended",
        }
    }
}

/// Indexed by [`MealKind::index`].
const TIMINGS: [MealTiming; MealKind::COUNT] = [
    MealTiming {
        serving_start: hm(7, 0),
        serving_end: hm(9, 0),
        edit_deadline: hm(5, 0),
    },
    MealTiming {
        serving_start: hm(12, 30),
        serving_end: hm(14, 0),
        edit_deadline: hm(10, 30),
    },
    MealTiming {
        serving_start: hm(16, 30),
        serving_end: hm(18, 30),
        edit_deadline: hm(14, 30),
    },
    MealTiming {
        serving_start: hm(19, 30),
        serving_end: hm(21, 0),
        edit_deadline: hm(17, 30),
    },
];

pub struct MealCalendar;

impl MealCalendar {
    /// Fixed serving order.
    pub fn order() -> [MealKind; 4] {
        MealKind::ALL
    }

    pub fn timing(meal: MealKind) -> MealTiming {
        TIMINGS[meal.index()]
    }

    pub fn status_at(meal: MealKind, at: NaiveTime) -> MealStatus {
        let t = Self::timing(meal);

        if at < t.serving_start {
            MealStatus::NotStarted
        } else if at < t.ending_soon_from() {
            MealStatus::Started
        } else if at < t.serving_end {
            MealStatus::EndingSoon
        } else {
            MealStatus::Ended
        }
    }

    /// First meal of the day that has not ended yet.
    pub fn next_meal(at: NaiveTime) -> Option<MealKind> {
        Self::order()
            .into_iter()
            .find(|m| Self::status_at(*m, at) != MealStatus::Ended)
    }

    /// Whether a pause of `meal` on `pause_date` may still be changed at `now`.
    ///
    /// Future dates are always editable, today only before the meal's edit
    /// deadline, past dates never.
    pub fn can_edit(meal: MealKind, pause_date: NaiveDate, now: NaiveDateTime) -> bool {
        let today = now.date();

        if pause_date > today {
            return true;
        }
        if pause_date == today {
            return now.time() < Self::timing(meal).edit_deadline;
        }
        false
    }
}
