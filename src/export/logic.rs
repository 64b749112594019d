use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_pauses, load_pauses_for_student};
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::PauseExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export pause records, all students or only `student`.
    ///
    /// `file` must be an absolute path. Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        student: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let records = match student {
            Some(s) => load_pauses_for_student(&pool.conn, s)?,
            None => load_all_pauses(&pool.conn)?,
        };

        if records.is_empty() {
            warning("No pauses found to export.");
            return Ok(0);
        }

        let rows: Vec<PauseExport> = records.iter().map(PauseExport::from).collect();

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        let label = format.as_str().to_ascii_uppercase();
        notify_export_success(&label, path);
        audit_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} rows → {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
