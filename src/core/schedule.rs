//! Derived, non-persisted views over a student's pause records.

use crate::core::span::add_days;
use crate::models::meal_kind::MealKind;
use crate::models::pause_record::PauseRecord;
use chrono::NaiveDate;

/// Meals paused on `date` by active records, in serving order.
pub fn paused_meals_on_date(records: &[PauseRecord], date: NaiveDate) -> Vec<MealKind> {
    MealKind::ALL
        .into_iter()
        .filter(|m| records.iter().any(|r| r.covers_cell(*m, date)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub paused: Vec<MealKind>,
}

impl DaySchedule {
    pub fn eaten(&self) -> Vec<MealKind> {
        MealKind::ALL
            .into_iter()
            .filter(|m| !self.paused.contains(m))
            .collect()
    }

    pub fn is_paused(&self, meal: MealKind) -> bool {
        self.paused.contains(&meal)
    }
}

/// Per-date view of `days` consecutive dates starting at `from`.
pub fn schedule(records: &[PauseRecord], from: NaiveDate, days: u32) -> Vec<DaySchedule> {
    (0..days as u64)
        .map(|i| {
            let date = add_days(from, i);
            DaySchedule {
                date,
                paused: paused_meals_on_date(records, date),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct CategorizedPauses {
    pub active: Vec<PauseRecord>,
    pub upcoming: Vec<PauseRecord>,
    pub past: Vec<PauseRecord>,
}

/// Split records into active (covering today), upcoming and past/cancelled.
pub fn categorize(records: &[PauseRecord], today: NaiveDate) -> CategorizedPauses {
    let mut out = CategorizedPauses::default();

    for r in records {
        if !r.is_active || r.end_date < today {
            out.past.push(r.clone());
        } else if r.start_date > today {
            out.upcoming.push(r.clone());
        } else {
            out.active.push(r.clone());
        }
    }

    out
}
