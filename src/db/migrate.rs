use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `pauses` table exists.
fn pauses_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='pauses'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `pauses` table has a given column.
fn pauses_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('pauses')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `pauses` table with the modern schema.
fn create_pauses_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS pauses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id  TEXT NOT NULL,
            meal        TEXT NOT NULL CHECK(meal IN ('breakfast','lunch','snacks','dinner')),
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            is_active   INTEGER NOT NULL DEFAULT 1,
            template    TEXT NOT NULL DEFAULT 'custom' CHECK(template IN ('tomorrow','weekend','custom')),
            source_ref  TEXT,
            created_at  TEXT NOT NULL,
            CHECK(start_date <= end_date)
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_pauses_student_meal ON pauses(student_id, meal, is_active);
        CREATE INDEX IF NOT EXISTS idx_pauses_dates ON pauses(start_date, end_date);
        "#,
    )?;
    Ok(())
}

/// Early databases stored pauses without the outpass reference.
fn migrate_add_source_ref(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_add_source_ref";

    if pauses_has_column(conn, "source_ref")? {
        if !migration_applied(conn, version)? {
            mark_applied(conn, version, "source_ref already present")?;
        }
        return Ok(());
    }

    conn.execute("ALTER TABLE pauses ADD COLUMN source_ref TEXT;", [])?;
    mark_applied(conn, version, "Added source_ref to pauses")?;

    success(format!(
        "Migration applied: {} → added 'source_ref' to pauses table",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let version = "20250301_0001_create_pauses";
    if !pauses_table_exists(conn)? {
        create_pauses_table(conn)?;
        mark_applied(conn, version, "Created pauses table")?;
        log::info!("created pauses table");
    }

    migrate_add_source_ref(conn)?;

    ensure_indexes(conn)?;
    Ok(())
}
