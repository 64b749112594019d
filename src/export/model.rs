use crate::models::pause_record::PauseRecord;
use serde::Serialize;

/// Flat row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PauseExport {
    pub id: i64,
    pub student_id: String,
    pub meal: String,
    pub start_date: String,
    pub end_date: String,
    pub active: bool,
    pub template: String,
    pub source_ref: String,
    pub created_at: String,
}

impl From<&PauseRecord> for PauseExport {
    fn from(r: &PauseRecord) -> Self {
        Self {
            id: r.id,
            student_id: r.student_id.clone(),
            meal: r.meal.as_str().to_string(),
            start_date: r.start_str(),
            end_date: r.end_str(),
            active: r.is_active,
            template: r.template.as_str().to_string(),
            source_ref: r.source_ref.clone().unwrap_or_default(),
            created_at: r.created_at.clone(),
        }
    }
}
