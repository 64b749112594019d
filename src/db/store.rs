//! SQLite-backed [`PauseStore`].

use crate::core::cancel::check_cancel;
use crate::core::submit::PauseStore;
use crate::db::pool::DbPool;
use crate::db::queries::{
    deactivate_pause, insert_pause, load_overlapping, load_pause_by_id, load_pauses_for_student,
};
use crate::errors::{AppError, AppResult, PauseCell, RuleViolation};
use crate::models::command::PauseCommand;
use crate::models::pause_record::PauseRecord;
use crate::models::template::PauseTemplate;
use chrono::NaiveDateTime;
use rusqlite::Connection;

pub struct SqlitePauseStore<'a> {
    pool: &'a mut DbPool,
}

impl<'a> SqlitePauseStore<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }
}

/// Overlap check and insert for one command on an open connection or
/// transaction.
fn insert_command(
    conn: &Connection,
    student_id: &str,
    command: &PauseCommand,
    template: PauseTemplate,
    source_ref: Option<&str>,
) -> AppResult<Vec<PauseRecord>> {
    let mut cells: Vec<PauseCell> = Vec::new();

    for meal in &command.meals {
        for existing in load_overlapping(conn, student_id, *meal, &command.start, &command.end)? {
            cells.extend(command.cells_covered_by(&existing));
        }
    }

    if !cells.is_empty() {
        cells.sort();
        cells.dedup();
        return Err(RuleViolation::AlreadyPaused { cells }.into());
    }

    let mut out = Vec::with_capacity(command.meals.len());
    for meal in &command.meals {
        out.push(insert_pause(
            conn,
            student_id,
            *meal,
            command.start,
            command.end,
            template,
            source_ref,
        )?);
    }
    Ok(out)
}

impl PauseStore for SqlitePauseStore<'_> {
    fn list_pauses(&self, student_id: &str) -> AppResult<Vec<PauseRecord>> {
        Ok(load_pauses_for_student(&self.pool.conn, student_id)?)
    }

    fn create_pause(
        &mut self,
        student_id: &str,
        command: &PauseCommand,
        template: PauseTemplate,
        source_ref: Option<&str>,
    ) -> AppResult<Vec<PauseRecord>> {
        let tx = self.pool.conn.transaction()?;
        let records = insert_command(&tx, student_id, command, template, source_ref)?;
        tx.commit()?;
        Ok(records)
    }

    fn cancel_pause(&mut self, id: i64, now: NaiveDateTime) -> AppResult<PauseRecord> {
        let record = load_pause_by_id(&self.pool.conn, id)?.ok_or(AppError::PauseNotFound(id))?;

        check_cancel(&record, now)?;
        deactivate_pause(&self.pool.conn, id)?;

        Ok(PauseRecord {
            is_active: false,
            ..record
        })
    }

    /// All commands in one transaction: either every record is written or
    /// none is.
    fn create_batch(
        &mut self,
        student_id: &str,
        commands: &[PauseCommand],
        template: PauseTemplate,
        source_ref: Option<&str>,
    ) -> AppResult<Vec<PauseRecord>> {
        let tx = self.pool.conn.transaction()?;

        let mut out = Vec::new();
        for cmd in commands {
            out.extend(insert_command(&tx, student_id, cmd, template, source_ref)?);
        }

        tx.commit()?;
        Ok(out)
    }
}
