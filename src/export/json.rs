use crate::errors::AppResult;
use crate::export::model::PauseExport;
use std::path::Path;

pub(crate) fn write_json(path: &Path, rows: &[PauseExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
