use super::{meal_kind::MealKind, template::PauseTemplate};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PauseRecord {
    pub id: i64,
    pub student_id: String,        // ⇔ pauses.student_id
    pub meal: MealKind,            // ⇔ pauses.meal ('breakfast' | 'lunch' | 'snacks' | 'dinner')
    pub start_date: NaiveDate,     // ⇔ pauses.start_date (TEXT "YYYY-MM-DD")
    pub end_date: NaiveDate,       // ⇔ pauses.end_date (TEXT "YYYY-MM-DD")
    pub is_active: bool,           // ⇔ pauses.is_active (INT 0/1)
    pub template: PauseTemplate,   // ⇔ pauses.template
    pub source_ref: Option<String>, // ⇔ pauses.source_ref (e.g. outpass id)
    pub created_at: String,        // ⇔ pauses.created_at (TEXT, ISO8601)
}

impl PauseRecord {
    /// True when this record is active and covers `date`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.is_active && self.start_date <= date && date <= self.end_date
    }

    /// True when this record is active and pauses `meal` on `date`.
    pub fn covers_cell(&self, meal: MealKind, date: NaiveDate) -> bool {
        self.meal == meal && self.covers(date)
    }

    /// Part of `[start, end]` on which this record pauses `meal`.
    pub fn intersect(
        &self,
        meal: MealKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Option<(NaiveDate, NaiveDate)> {
        if !self.is_active || self.meal != meal {
            return None;
        }
        let from = start.max(self.start_date);
        let to = end.min(self.end_date);
        (from <= to).then_some((from, to))
    }

    /// Number of calendar days in the record (inclusive).
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn start_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}
