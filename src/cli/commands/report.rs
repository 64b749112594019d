use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::report::daily_report;
use crate::core::span::add_days;
use crate::db::pool::DbPool;
use crate::db::queries::load_active_on_date;
use crate::errors::AppResult;
use crate::models::meal_kind::MealKind;
use crate::ui::messages::header;
use crate::utils::date::parse_optional_date;

/// Handle the `report` command (tomorrow by default, as the mess plans ahead).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date, json } = &cli.command {
        let today = clock_for(cli)?.today();
        let date = parse_optional_date(date.as_ref())?.unwrap_or_else(|| add_days(today, 1));

        let pool = DbPool::open(&cfg.database)?;
        let records = load_active_on_date(&pool.conn, &date)?;
        let report = daily_report(&records, date);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        header(format!("Mess report for {}", date));
        for meal in MealKind::ALL {
            println!("{} {:<10} {:>4} paused", meal.icon(), meal.as_str(), report.paused(meal));
        }
        println!();
        println!("Students with a pause : {}", report.students_with_pause);
        println!("Total meals paused    : {}", report.total_meals_paused);
    }

    Ok(())
}
