use crate::cli::commands::{clock_for, student_or_default};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::schedule::categorize;
use crate::core::submit::PauseStore;
use crate::db::pool::DbPool;
use crate::db::store::SqlitePauseStore;
use crate::errors::AppResult;
use crate::models::pause_record::PauseRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_inactive;
use crate::utils::table::{Column, Table};

fn render(records: &[PauseRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Meal", 10),
        Column::new("From", 10),
        Column::new("To", 10),
        Column::new("Template", 9),
        Column::new("Source", 12),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            colorize_inactive(r.meal.as_str(), r.is_active),
            r.start_str(),
            r.end_str(),
            r.template.as_str().to_string(),
            r.source_ref.clone().unwrap_or_else(|| "-".into()),
        ]);
    }

    table.render()
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { student, all } = &cli.command {
        let today = clock_for(cli)?.today();
        let student_id = student_or_default(student, cfg);

        let mut pool = DbPool::open(&cfg.database)?;
        let records = SqlitePauseStore::new(&mut pool).list_pauses(student_id)?;

        if records.is_empty() {
            info(format!("No pauses recorded for {}.", student_id));
            return Ok(());
        }

        let groups = categorize(&records, today);
        let mut sections = vec![("Active", &groups.active), ("Upcoming", &groups.upcoming)];
        if *all {
            sections.push(("Past", &groups.past));
        }

        for (title, group) in sections {
            header(format!("{} pauses for {} ({})", title, student_id, group.len()));
            if group.is_empty() {
                println!("  -\n");
            } else {
                println!("{}", render(group));
            }
        }
    }

    Ok(())
}
