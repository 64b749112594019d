pub mod cancel;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod meals;
pub mod pause;
pub mod report;
pub mod schedule;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock::{Clock, from_override};
use crate::errors::AppResult;
use crate::utils::time::parse_optional_datetime;

/// Clock for this invocation, honouring the hidden `--now` flag.
pub(crate) fn clock_for(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    Ok(from_override(parse_optional_datetime(cli.now.as_ref())?))
}

pub(crate) fn student_or_default<'a>(student: &'a Option<String>, cfg: &'a Config) -> &'a str {
    student.as_deref().unwrap_or(&cfg.student_id)
}
