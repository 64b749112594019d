//! Mess-wide daily statistics: how many students skip each meal on a date.

use crate::models::meal_kind::MealKind;
use crate::models::pause_record::PauseRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, Serialize)]
pub struct MealStats {
    pub paused: usize,
    pub students: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub meals: BTreeMap<MealKind, MealStats>,
    pub students_with_pause: usize,
    pub total_meals_paused: usize,
}

impl DailyReport {
    pub fn paused(&self, meal: MealKind) -> usize {
        self.meals.get(&meal).map(|s| s.paused).unwrap_or(0)
    }
}

/// Aggregate the records covering `date` into per-meal counts.
///
/// Records that do not cover `date` or are inactive are skipped, so callers
/// may pass a superset.
pub fn daily_report(records: &[PauseRecord], date: NaiveDate) -> DailyReport {
    let mut meals: BTreeMap<MealKind, MealStats> = MealKind::ALL
        .into_iter()
        .map(|m| (m, MealStats::default()))
        .collect();
    let mut students = BTreeSet::new();
    let mut total = 0;

    for r in records.iter().filter(|r| r.covers(date)) {
        let entry = meals.entry(r.meal).or_default();
        if entry.students.contains(&r.student_id) {
            continue;
        }
        entry.paused += 1;
        entry.students.push(r.student_id.clone());
        students.insert(r.student_id.clone());
        total += 1;
    }

    DailyReport {
        date,
        meals,
        students_with_pause: students.len(),
        total_meals_paused: total,
    }
}
