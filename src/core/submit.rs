//! Persistence seam for pause records and the submission of engine output.

use crate::errors::{AppError, AppResult, RuleViolation};
use crate::models::command::PauseCommand;
use crate::models::pause_record::PauseRecord;
use crate::models::template::PauseTemplate;
use chrono::NaiveDateTime;

/// Store of pause records (the "persistence collaborator").
pub trait PauseStore {
    /// Every record of a student, active or not, oldest first.
    fn list_pauses(&self, student_id: &str) -> AppResult<Vec<PauseRecord>>;

    fn list_active_pauses(&self, student_id: &str) -> AppResult<Vec<PauseRecord>> {
        Ok(self
            .list_pauses(student_id)?
            .into_iter()
            .filter(|r| r.is_active)
            .collect())
    }

    /// Persist one command as one record per meal.
    fn create_pause(
        &mut self,
        student_id: &str,
        command: &PauseCommand,
        template: PauseTemplate,
        source_ref: Option<&str>,
    ) -> AppResult<Vec<PauseRecord>>;

    /// Deactivate a record, subject to the edit-deadline guard.
    fn cancel_pause(&mut self, id: i64, now: NaiveDateTime) -> AppResult<PauseRecord>;

    /// Persist the whole output of one decomposition.
    ///
    /// Stores without transactions fall back to [`submit_sequential`].
    fn create_batch(
        &mut self,
        student_id: &str,
        commands: &[PauseCommand],
        template: PauseTemplate,
        source_ref: Option<&str>,
    ) -> AppResult<Vec<PauseRecord>> {
        submit_sequential(self, student_id, commands, template, source_ref)
    }
}

/// Submit commands one by one, stopping at the first failure.
///
/// A failure on the first command is returned as-is (nothing was written).
/// A failure after at least one commit becomes
/// [`RuleViolation::PartialSubmissionFailure`] listing what was committed
/// and what was not; failed commands are never retried.
pub fn submit_sequential<S: PauseStore + ?Sized>(
    store: &mut S,
    student_id: &str,
    commands: &[PauseCommand],
    template: PauseTemplate,
    source_ref: Option<&str>,
) -> AppResult<Vec<PauseRecord>> {
    let mut committed = Vec::new();

    for (i, cmd) in commands.iter().enumerate() {
        match store.create_pause(student_id, cmd, template, source_ref) {
            Ok(records) => committed.extend(records),
            Err(e) if i == 0 => return Err(e),
            Err(e) => {
                log::warn!(
                    "pause submission for {} stopped at command {}/{}: {}",
                    student_id,
                    i + 1,
                    commands.len(),
                    e
                );
                return Err(AppError::Rule(RuleViolation::PartialSubmissionFailure {
                    committed,
                    pending: commands[i..].to_vec(),
                    reason: e.to_string(),
                }));
            }
        }
    }

    Ok(committed)
}
