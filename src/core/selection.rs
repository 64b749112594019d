//! Boundary-day meal selection.
//!
//! The student picks the meals they *will eat* on the boundary day. The
//! selection is always a suffix of the serving order, so it is stored as a
//! single optional index: `None` means nothing selected (the whole day is
//! paused), `Some(k)` means meals `k..` are eaten.
//!
//! The same toggle rule serves the tomorrow, weekend and custom flows.

use crate::models::meal_kind::MealKind;
use crate::models::pause_record::PauseRecord;
use crate::models::resume_point::ResumePoint;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundarySelection {
    earliest: Option<usize>,
}

impl BoundarySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit resume point.
    pub fn from_resume_point(rp: ResumePoint) -> Self {
        Self {
            earliest: rp.first_eaten().map(|m| m.index()),
        }
    }

    /// Earliest selected meal, if any.
    pub fn earliest(&self) -> Option<MealKind> {
        self.earliest.and_then(MealKind::from_index)
    }

    /// Meals currently selected to be eaten.
    pub fn selected(&self) -> &'static [MealKind] {
        match self.earliest {
            Some(k) => &MealKind::ALL[k..],
            None => &[],
        }
    }

    pub fn is_selected(&self, meal: MealKind) -> bool {
        self.earliest.is_some_and(|k| meal.index() >= k)
    }

    /// Selected because an earlier meal was picked; cannot be toggled alone.
    pub fn is_locked(&self, meal: MealKind) -> bool {
        self.earliest.is_some_and(|k| meal.index() > k)
    }

    /// Meals shown as "no need" (before the earliest selected meal).
    pub fn is_skipped(&self, meal: MealKind) -> bool {
        self.earliest.is_some_and(|k| meal.index() < k)
    }

    pub fn resume_point(&self) -> ResumePoint {
        match self.earliest() {
            Some(meal) => ResumePoint::from_meal(meal),
            None => ResumePoint::FULL_PAUSE,
        }
    }
}

/// Apply one toggle to a boundary-day selection.
///
/// - nothing selected, or `meal` earlier than the current earliest: the
///   selection becomes `meal` and every later meal;
/// - `meal` later than the current earliest: locked, no change;
/// - `meal` is the current earliest: the selection is cleared.
pub fn toggle(selection: &mut BoundarySelection, meal: MealKind) {
    let idx = meal.index();

    selection.earliest = match selection.earliest {
        None => Some(idx),
        Some(k) if idx < k => Some(idx),
        Some(k) if idx > k => Some(k),
        Some(_) => None,
    };
}

/// Like [`toggle`], but ignores meals already paused on `date` by an
/// active record. Returns whether the toggle was applied.
pub fn toggle_unless_frozen(
    selection: &mut BoundarySelection,
    meal: MealKind,
    date: NaiveDate,
    active: &[PauseRecord],
) -> bool {
    if active.iter().any(|r| r.covers_cell(meal, date)) {
        log::debug!("toggle of {} on {} ignored: already paused", meal, date);
        return false;
    }
    toggle(selection, meal);
    true
}
