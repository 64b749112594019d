use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::submit::PauseStore;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::store::SqlitePauseStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel { id } = &cli.command {
        let now = clock_for(cli)?.now();

        let mut pool = DbPool::open(&cfg.database)?;
        let record = SqlitePauseStore::new(&mut pool).cancel_pause(*id, now)?;

        let msg = format!(
            "Cancelled pause #{} ({} {}..{})",
            record.id,
            record.meal,
            record.start_str(),
            record.end_str()
        );
        success(&msg);
        audit_quiet(&pool.conn, "cancel", &record.student_id, &msg);
    }

    Ok(())
}
