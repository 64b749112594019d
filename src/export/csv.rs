use crate::errors::AppResult;
use crate::export::model::PauseExport;
use csv::Writer;
use std::path::Path;

/// Header row is derived from the `PauseExport` field names.
pub(crate) fn write_csv(path: &Path, rows: &[PauseExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
