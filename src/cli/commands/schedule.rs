use crate::cli::commands::{clock_for, student_or_default};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::schedule::schedule;
use crate::core::submit::PauseStore;
use crate::db::pool::DbPool;
use crate::db::store::SqlitePauseStore;
use crate::errors::AppResult;
use crate::models::meal_kind::MealKind;
use crate::ui::messages::header;
use crate::utils::colors::colorize_cell;
use crate::utils::date::{parse_optional_date, weekday_label};
use crate::utils::table::{Column, Table};

/// Handle the `schedule` command: one row per date, ✗ for paused meals.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        student,
        from,
        days,
    } = &cli.command
    {
        let today = clock_for(cli)?.today();
        let student_id = student_or_default(student, cfg);
        let from = parse_optional_date(from.as_ref())?.unwrap_or(today);
        let days = days.unwrap_or(cfg.schedule_days);

        let mut pool = DbPool::open(&cfg.database)?;
        let records = SqlitePauseStore::new(&mut pool).list_active_pauses(student_id)?;

        let mut columns = vec![Column::new("Date", 14)];
        columns.extend(MealKind::ALL.iter().map(|m| Column::new(m.as_str(), 10)));
        let mut table = Table::new(columns);

        let rows = schedule(&records, from, days);
        for day in &rows {
            let mut row = vec![weekday_label(day.date)];
            row.extend(MealKind::ALL.iter().map(|m| {
                if day.is_paused(*m) {
                    colorize_cell("✗ paused", true)
                } else {
                    colorize_cell("✓", false)
                }
            }));
            table.add_row(row);
        }

        header(format!("Schedule for {} from {}", student_id, from));
        println!("{}", table.render());

        let paused: usize = rows.iter().map(|d| d.paused.len()).sum();
        println!("{} of {} meals paused", paused, rows.len() * MealKind::COUNT);
    }

    Ok(())
}
