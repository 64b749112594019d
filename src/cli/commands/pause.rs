use crate::cli::commands::{clock_for, student_or_default};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::decompose::PauseRequest;
use crate::core::pause::PauseLogic;
use crate::core::span::span_for;
use crate::core::submit::PauseStore;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::store::SqlitePauseStore;
use crate::errors::{AppError, AppResult, RuleViolation};
use crate::models::meal_kind::MealKind;
use crate::models::resume_point::ResumePoint;
use crate::ui::messages::{header, info, item, success, warning};
use crate::utils::date::parse_optional_date;

fn parse_meal(code: &str) -> AppResult<MealKind> {
    MealKind::from_code(code).ok_or_else(|| AppError::InvalidMeal(code.to_string()))
}

/// `--resume-from`: a meal code, or `none` to pause the whole boundary day.
fn parse_resume_from(value: Option<&str>) -> AppResult<Option<ResumePoint>> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().eq_ignore_ascii_case("none") => Ok(Some(ResumePoint::FULL_PAUSE)),
        Some(v) => parse_meal(v).map(|m| Some(ResumePoint::from_meal(m))),
    }
}

/// Handle the `pause` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Pause {
        template,
        start,
        end,
        resume_from,
        toggle,
        source,
        student,
        dry_run,
    } = &cli.command
    {
        let now = clock_for(cli)?.now();
        let cutoff = cfg.cutoff()?;
        let student_id = student_or_default(student, cfg);

        let custom = match (
            parse_optional_date(start.as_ref())?,
            parse_optional_date(end.as_ref())?,
        ) {
            (Some(s), Some(e)) => Some((s, e)),
            (None, None) => None,
            _ => {
                return Err(AppError::MissingArgument(
                    "--start and --end must be given together".into(),
                ));
            }
        };

        if template.is_fixed_span() && custom.is_some() {
            warning(format!(
                "--start/--end are ignored for the {} template",
                template
            ));
        }

        let (span_start, span_end) = span_for(*template, now, custom)?;
        let start_from = parse_resume_from(resume_from.as_deref())?;
        let toggles = toggle
            .iter()
            .map(|t| parse_meal(t))
            .collect::<AppResult<Vec<_>>>()?;

        let mut pool = DbPool::open(&cfg.database)?;
        let mut store = SqlitePauseStore::new(&mut pool);

        let active = store.list_active_pauses(student_id)?;
        let resume_point =
            PauseLogic::resolve_resume_point(start_from, &toggles, span_end, &active);

        let request = PauseRequest {
            template: *template,
            start: span_start,
            end: span_end,
            resume_point,
        };

        let commands = PauseLogic::plan(&store, student_id, &request, now, cutoff)?;

        header(format!(
            "{} pause for {}: {} → {} ({})",
            template, student_id, span_start, span_end, resume_point
        ));
        for (i, cmd) in commands.iter().enumerate() {
            item(i + 1, cmd);
        }

        if *dry_run {
            info("Dry run: nothing was saved.");
            return Ok(());
        }

        let result = store.create_batch(student_id, &commands, *template, source.as_deref());

        match result {
            Ok(records) => {
                let msg = format!(
                    "{} record(s) created, {} → {}, {}",
                    records.len(),
                    span_start,
                    span_end,
                    resume_point
                );
                success(&msg);
                audit_quiet(&pool.conn, "pause", student_id, &msg);
                Ok(())
            }
            Err(AppError::Rule(v @ RuleViolation::PartialSubmissionFailure { .. })) => {
                audit_quiet(&pool.conn, "partial", student_id, &v.to_string());
                Err(v.into())
            }
            Err(e) => Err(e),
        }
    } else {
        Ok(())
    }
}
