use crate::core::calendar::MealCalendar;
use crate::errors::{AppError, AppResult};
use crate::models::pause_record::PauseRecord;
use chrono::NaiveDateTime;

/// Guard applied by every store before deactivating a record.
///
/// - inactive or fully past records are immutable;
/// - records starting after today can always be cancelled;
/// - records covering today only before the meal's edit deadline.
pub fn check_cancel(record: &PauseRecord, now: NaiveDateTime) -> AppResult<()> {
    let today = now.date();

    if !record.is_active || record.end_date < today {
        return Err(AppError::PauseImmutable(record.id));
    }

    let check_date = record.start_date.max(today);
    if !MealCalendar::can_edit(record.meal, check_date, now) {
        return Err(AppError::CancelLocked {
            id: record.id,
            meal: record.meal,
            deadline: MealCalendar::timing(record.meal).edit_deadline,
        });
    }

    Ok(())
}
