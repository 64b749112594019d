//! Pause decomposition engine.
//!
//! Turns "pause from `start`, resume at meal `k` on `end`" into the minimal
//! list of per-meal creation commands. Pure: no I/O, no clock access.

use crate::core::span::{add_days, deadline_passed, min_start, span_for, sub_days};
use crate::errors::{AppResult, PauseCell, RuleViolation};
use crate::models::command::PauseCommand;
use crate::models::pause_record::PauseRecord;
use crate::models::resume_point::ResumePoint;
use crate::models::template::PauseTemplate;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseRequest {
    pub template: PauseTemplate,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub resume_point: ResumePoint,
}

impl PauseRequest {
    /// Build a request whose span comes from the template.
    pub fn from_template(
        template: PauseTemplate,
        now: NaiveDateTime,
        custom: Option<(NaiveDate, NaiveDate)>,
        resume_point: ResumePoint,
    ) -> AppResult<Self> {
        let (start, end) = span_for(template, now, custom)?;
        Ok(Self {
            template,
            start,
            end,
            resume_point,
        })
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}

fn check_range(req: &PauseRequest) -> Result<(), RuleViolation> {
    let invalid = match req.template {
        PauseTemplate::Custom => req.end < req.start,
        PauseTemplate::Tomorrow | PauseTemplate::Weekend => req.end <= req.start,
    };

    if invalid {
        return Err(RuleViolation::InvalidRange {
            start: req.start,
            end: req.end,
        });
    }
    Ok(())
}

fn check_deadline(
    req: &PauseRequest,
    now: NaiveDateTime,
    cutoff: NaiveTime,
) -> Result<(), RuleViolation> {
    if req.template == PauseTemplate::Tomorrow && deadline_passed(now, cutoff) {
        return Err(RuleViolation::DeadlinePassed {
            reason: format!(
                "tomorrow's meals can only be changed before {}",
                cutoff.format("%H:%M")
            ),
        });
    }

    let earliest = min_start(now, cutoff);
    if req.start < earliest {
        return Err(RuleViolation::DeadlinePassed {
            reason: format!(
                "pauses starting on {} are closed, earliest start is {}",
                req.start, earliest
            ),
        });
    }
    Ok(())
}

/// Split the span into full-day and boundary-day commands.
///
/// Assumes the range has already been validated.
pub fn partition(req: &PauseRequest) -> Vec<PauseCommand> {
    if req.template == PauseTemplate::Custom && req.is_single_day() {
        return vec![PauseCommand::full_day(req.start, req.start)];
    }

    let mut commands = Vec::new();

    match req.template {
        // Friday..Sunday is one full-day block, Monday is the boundary day.
        PauseTemplate::Weekend => {
            commands.push(PauseCommand::full_day(req.start, sub_days(req.end, 1)));
        }
        PauseTemplate::Tomorrow | PauseTemplate::Custom => {
            commands.push(PauseCommand::full_day(req.start, req.start));

            if (req.end - req.start).num_days() > 1 {
                commands.push(PauseCommand::full_day(
                    add_days(req.start, 1),
                    sub_days(req.end, 1),
                ));
            }
        }
    }

    let paused = req.resume_point.paused_meals();

    if req.resume_point.is_full_pause() {
        // Boundary day fully paused: extend the last full-day block.
        if let Some(last) = commands.last_mut() {
            last.end = req.end;
        }
    } else if !paused.is_empty() {
        commands.push(PauseCommand::new(paused, req.end, req.end));
    }

    commands
}

/// Cells of `commands` already covered by an active record, sorted.
pub fn overlapping_cells(commands: &[PauseCommand], active: &[PauseRecord]) -> Vec<PauseCell> {
    let mut cells: Vec<PauseCell> = commands
        .iter()
        .flat_map(|c| active.iter().flat_map(move |r| c.cells_covered_by(r)))
        .collect();
    cells.sort();
    cells.dedup();
    cells
}

/// Validate `req` against the rules and derive the commands to submit.
///
/// `active` are the student's current pause records; inactive entries are
/// ignored. Nothing is written: submission belongs to the caller.
pub fn decompose(
    req: &PauseRequest,
    active: &[PauseRecord],
    now: NaiveDateTime,
    cutoff: NaiveTime,
) -> Result<Vec<PauseCommand>, RuleViolation> {
    check_range(req)?;

    let commands = partition(req);

    let overlap = overlapping_cells(&commands, active);
    if !overlap.is_empty() {
        return Err(RuleViolation::AlreadyPaused { cells: overlap });
    }

    check_deadline(req, now, cutoff)?;

    log::debug!(
        "{} pause {}..{} ({}) → {} command(s)",
        req.template,
        req.start,
        req.end,
        req.resume_point,
        commands.len()
    );

    Ok(commands)
}
