//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent. Scheduling rule violations live in their own enum
//! so callers can match on them without caring about I/O or SQLite.

use crate::models::command::PauseCommand;
use crate::models::meal_kind::MealKind;
use crate::models::pause_record::PauseRecord;
use chrono::{NaiveDate, NaiveTime};
use std::io;
use thiserror::Error;

/// A single `(meal, date)` cell of the pause grid.
pub type PauseCell = (MealKind, NaiveDate);

fn format_cells(cells: &[PauseCell]) -> String {
    cells
        .iter()
        .map(|(meal, date)| format!("{} on {}", meal, date))
        .collect::<Vec<_>>()
        .join(", ")
}

fn partial_summary(committed: &[PauseRecord], pending: &[PauseCommand]) -> String {
    let done = committed.len();
    format!(
        "{} record(s) committed, {} command(s) not applied",
        done,
        pending.len()
    )
}

/// Business-rule violations detected by the pause engine or its store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Already paused: {}", format_cells(.cells))]
    AlreadyPaused { cells: Vec<PauseCell> },

    #[error("Deadline passed: {reason}")]
    DeadlinePassed { reason: String },

    #[error("Invalid range: end date {end} must not be before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Partial submission: {}: {reason}", partial_summary(.committed, .pending))]
    PartialSubmissionFailure {
        committed: Vec<PauseRecord>,
        pending: Vec<PauseCommand>,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid meal: {0}")]
    InvalidMeal(String),

    #[error("Invalid pause template: {0}")]
    InvalidTemplate(String),

    // ---------------------------
    // Scheduling rules
    // ---------------------------
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Pause #{0} not found")]
    PauseNotFound(i64),

    #[error("Pause #{id} ({meal}) can no longer be cancelled: edit deadline {deadline} has passed")]
    CancelLocked {
        id: i64,
        meal: MealKind,
        deadline: NaiveTime,
    },

    #[error("Pause #{0} is already in the past or inactive")]
    PauseImmutable(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl AppError {
    /// Rule violation carried by this error, if any.
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            AppError::Rule(v) => Some(v),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
