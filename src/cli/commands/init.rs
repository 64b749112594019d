use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped with `--test`), the
/// SQLite database and runs all pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing mealpause…");
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open(&db_path)?;
    success(format!("Database initialized at {}", &db_path));

    audit_quiet(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 mealpause initialization completed!");
    Ok(())
}
