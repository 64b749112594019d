use mealpause::core::report::daily_report;
use mealpause::core::schedule::{categorize, paused_meals_on_date, schedule};
use mealpause::models::meal_kind::MealKind;

mod common;
use common::{d, record};

#[test]
fn test_paused_meals_on_date_in_serving_order() {
    let records = vec![
        record(1, "s1", MealKind::Dinner, "2025-01-10", "2025-01-12"),
        record(2, "s1", MealKind::Breakfast, "2025-01-11", "2025-01-11"),
    ];

    assert_eq!(
        paused_meals_on_date(&records, d("2025-01-11")),
        vec![MealKind::Breakfast, MealKind::Dinner]
    );
    assert!(paused_meals_on_date(&records, d("2025-01-13")).is_empty());
}

#[test]
fn test_schedule_rows() {
    let mut cancelled = record(3, "s1", MealKind::Lunch, "2025-01-10", "2025-01-12");
    cancelled.is_active = false;
    let records = vec![
        record(1, "s1", MealKind::Dinner, "2025-01-10", "2025-01-11"),
        cancelled,
    ];

    let rows = schedule(&records, d("2025-01-09"), 4);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].date, d("2025-01-09"));
    assert!(rows[0].paused.is_empty());
    assert!(rows[1].is_paused(MealKind::Dinner));
    assert!(!rows[1].is_paused(MealKind::Lunch));
    assert_eq!(
        rows[2].eaten(),
        vec![MealKind::Breakfast, MealKind::Lunch, MealKind::Snacks]
    );
    assert!(rows[3].paused.is_empty());
}

#[test]
fn test_categorize() {
    let today = d("2025-01-10");
    let mut cancelled = record(4, "s1", MealKind::Lunch, "2025-01-12", "2025-01-12");
    cancelled.is_active = false;

    let records = vec![
        record(1, "s1", MealKind::Dinner, "2025-01-08", "2025-01-10"),
        record(2, "s1", MealKind::Dinner, "2025-01-11", "2025-01-12"),
        record(3, "s1", MealKind::Breakfast, "2025-01-01", "2025-01-09"),
        cancelled,
    ];

    let groups = categorize(&records, today);
    assert_eq!(groups.active.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(groups.upcoming.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    assert_eq!(groups.past.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn test_daily_report_counts_students_once_per_meal() {
    let date = d("2025-01-11");
    let records = vec![
        record(1, "s1", MealKind::Lunch, "2025-01-10", "2025-01-12"),
        record(2, "s1", MealKind::Dinner, "2025-01-11", "2025-01-11"),
        record(3, "s2", MealKind::Lunch, "2025-01-11", "2025-01-11"),
        // Same student, same meal twice: counted once.
        record(4, "s2", MealKind::Lunch, "2025-01-09", "2025-01-11"),
        // Not on the date.
        record(5, "s3", MealKind::Breakfast, "2025-01-12", "2025-01-12"),
    ];

    let report = daily_report(&records, date);
    assert_eq!(report.paused(MealKind::Lunch), 2);
    assert_eq!(report.paused(MealKind::Dinner), 1);
    assert_eq!(report.paused(MealKind::Breakfast), 0);
    assert_eq!(report.students_with_pause, 2);
    assert_eq!(report.total_meals_paused, 3);
}
