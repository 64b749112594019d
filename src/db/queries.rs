use crate::errors::AppError;
use crate::models::meal_kind::MealKind;
use crate::models::pause_record::PauseRecord;
use crate::models::template::PauseTemplate;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_PAUSES: &str = "SELECT id, student_id, meal, start_date, end_date, is_active, \
                             template, source_ref, created_at FROM pauses";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(s.to_string())))
}

pub fn map_row(row: &Row) -> Result<PauseRecord> {
    let meal_str: String = row.get("meal")?;
    let meal = MealKind::from_db_str(&meal_str)
        .ok_or_else(|| conversion_error(AppError::InvalidMeal(meal_str.clone())))?;

    let template_str: String = row.get("template")?;
    let template = PauseTemplate::from_db_str(&template_str)
        .ok_or_else(|| conversion_error(AppError::InvalidTemplate(template_str.clone())))?;

    let start: String = row.get("start_date")?;
    let end: String = row.get("end_date")?;

    Ok(PauseRecord {
        id: row.get("id")?,
        student_id: row.get("student_id")?,
        meal,
        start_date: parse_db_date(&start)?,
        end_date: parse_db_date(&end)?,
        is_active: row.get::<_, i64>("is_active")? != 0,
        template,
        source_ref: row.get("source_ref")?,
        created_at: row.get("created_at")?,
    })
}

fn collect(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> Result<Vec<PauseRecord>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_pause(
    conn: &Connection,
    student_id: &str,
    meal: MealKind,
    start: NaiveDate,
    end: NaiveDate,
    template: PauseTemplate,
    source_ref: Option<&str>,
) -> Result<PauseRecord> {
    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO pauses (student_id, meal, start_date, end_date, is_active, template, source_ref, created_at)
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?6, ?7)",
        params![
            student_id,
            meal.to_db_str(),
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
            template.to_db_str(),
            source_ref,
            created_at,
        ],
    )?;

    Ok(PauseRecord {
        id: conn.last_insert_rowid(),
        student_id: student_id.to_string(),
        meal,
        start_date: start,
        end_date: end,
        is_active: true,
        template,
        source_ref: source_ref.map(str::to_string),
        created_at,
    })
}

/// All records of a student, oldest first.
pub fn load_pauses_for_student(conn: &Connection, student_id: &str) -> Result<Vec<PauseRecord>> {
    collect(
        conn,
        &format!("{SELECT_PAUSES} WHERE student_id = ?1 ORDER BY start_date ASC, id ASC"),
        [student_id],
    )
}

/// Every record in the database (export).
pub fn load_all_pauses(conn: &Connection) -> Result<Vec<PauseRecord>> {
    collect(
        conn,
        &format!("{SELECT_PAUSES} ORDER BY student_id ASC, start_date ASC, id ASC"),
        [],
    )
}

/// Active records of any student covering `date`.
pub fn load_active_on_date(conn: &Connection, date: &NaiveDate) -> Result<Vec<PauseRecord>> {
    let d = date.format("%Y-%m-%d").to_string();
    collect(
        conn,
        &format!(
            "{SELECT_PAUSES} WHERE is_active = 1 AND start_date <= ?1 AND end_date >= ?1 \
             ORDER BY student_id ASC, id ASC"
        ),
        [d],
    )
}

/// Active records of one student pausing `meal` somewhere in `[start, end]`.
pub fn load_overlapping(
    conn: &Connection,
    student_id: &str,
    meal: MealKind,
    start: &NaiveDate,
    end: &NaiveDate,
) -> Result<Vec<PauseRecord>> {
    collect(
        conn,
        &format!(
            "{SELECT_PAUSES} WHERE student_id = ?1 AND meal = ?2 AND is_active = 1 \
             AND start_date <= ?4 AND end_date >= ?3 ORDER BY start_date ASC"
        ),
        params![
            student_id,
            meal.to_db_str(),
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
    )
}

pub fn load_pause_by_id(conn: &Connection, id: i64) -> Result<Option<PauseRecord>> {
    conn.query_row(&format!("{SELECT_PAUSES} WHERE id = ?1"), [id], map_row)
        .optional()
}

pub fn deactivate_pause(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("UPDATE pauses SET is_active = 0 WHERE id = ?1", [id])
}
