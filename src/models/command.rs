use super::meal_kind::MealKind;
use super::pause_record::PauseRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// One creation command produced by the decomposition engine.
///
/// A command pauses every meal in `meals` for every date in
/// `[start, end]`; the store persists it as one record per meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PauseCommand {
    pub meals: Vec<MealKind>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PauseCommand {
    pub fn new(meals: &[MealKind], start: NaiveDate, end: NaiveDate) -> Self {
        let mut meals = meals.to_vec();
        meals.sort();
        meals.dedup();
        Self { meals, start, end }
    }

    /// Every meal on every date of `[start, end]`.
    pub fn full_day(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(&MealKind::ALL, start, end)
    }

    pub fn is_full_day(&self) -> bool {
        self.meals.len() == MealKind::COUNT
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Every `(meal, date)` cell this command pauses.
    pub fn cells(&self) -> Vec<(MealKind, NaiveDate)> {
        self.dates()
            .flat_map(|d| self.meals.iter().map(move |m| (*m, d)))
            .collect()
    }

    /// Cells of this command that `record` already pauses.
    ///
    /// Only the intersection of the two date ranges is walked.
    pub fn cells_covered_by(&self, record: &PauseRecord) -> Vec<(MealKind, NaiveDate)> {
        if !self.meals.contains(&record.meal) {
            return Vec::new();
        }
        match record.intersect(record.meal, self.start, self.end) {
            Some((from, to)) => from
                .iter_days()
                .take_while(|d| *d <= to)
                .map(|d| (record.meal, d))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for PauseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meals = if self.is_full_day() {
            "all meals".to_string()
        } else {
            self.meals
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        if self.start == self.end {
            write!(f, "{} on {}", meals, self.start)
        } else {
            write!(f, "{} from {} to {}", meals, self.start, self.end)
        }
    }
}
