use crate::core::decompose::{PauseRequest, decompose};
use crate::core::selection::{BoundarySelection, toggle_unless_frozen};
use crate::core::submit::PauseStore;
use crate::errors::AppResult;
use crate::models::command::PauseCommand;
use crate::models::meal_kind::MealKind;
use crate::models::pause_record::PauseRecord;
use crate::models::resume_point::ResumePoint;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// High-level business logic for the `pause` command.
pub struct PauseLogic;

impl PauseLogic {
    /// Replay boundary-day toggles on top of an optional starting point.
    ///
    /// Toggles hitting meals already paused on `boundary` are ignored.
    pub fn resolve_resume_point(
        start_from: Option<ResumePoint>,
        toggles: &[MealKind],
        boundary: NaiveDate,
        active: &[PauseRecord],
    ) -> ResumePoint {
        let mut selection = start_from
            .map(BoundarySelection::from_resume_point)
            .unwrap_or_default();

        for meal in toggles {
            toggle_unless_frozen(&mut selection, *meal, boundary, active);
        }

        selection.resume_point()
    }

    /// Read the student's active pauses and decompose the request.
    pub fn plan<S: PauseStore + ?Sized>(
        store: &S,
        student_id: &str,
        request: &PauseRequest,
        now: NaiveDateTime,
        cutoff: NaiveTime,
    ) -> AppResult<Vec<PauseCommand>> {
        let active = store.list_active_pauses(student_id)?;
        Ok(decompose(request, &active, now, cutoff)?)
    }

    /// Plan and submit in one go.
    pub fn apply<S: PauseStore + ?Sized>(
        store: &mut S,
        student_id: &str,
        request: &PauseRequest,
        now: NaiveDateTime,
        cutoff: NaiveTime,
        source_ref: Option<&str>,
    ) -> AppResult<Vec<PauseRecord>> {
        let commands = Self::plan(store, student_id, request, now, cutoff)?;
        store.create_batch(student_id, &commands, request.template, source_ref)
    }
}
