use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, rti, setup_test_db, temp_out};

const NOW: &str = "2025-01-09 10:00";

fn pause_scenario_b(db_path: &str) {
    rti()
        .args([
            "--db",
            db_path,
            "--test",
            "--now",
            NOW,
            "pause",
            "--template",
            "custom",
            "--start",
            "2025-01-10",
            "--end",
            "2025-01-13",
            "--resume-from",
            "lunch",
            "--student",
            "s1",
            "--source",
            "OUT-7",
        ])
        .assert()
        .success()
        .stdout(contains("breakfast on 2025-01-13"))
        .stdout(contains("9 record(s) created"));
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_pause_then_repeat_is_rejected() {
    let db_path = setup_test_db("cli_pause_repeat");
    init_db(&db_path);
    pause_scenario_b(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "pause",
            "--template",
            "custom",
            "--start",
            "2025-01-10",
            "--end",
            "2025-01-13",
            "--resume-from",
            "lunch",
            "--student",
            "s1",
        ])
        .assert()
        .failure()
        .stderr(contains("Already paused"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let db_path = setup_test_db("cli_dry_run");
    init_db(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "pause",
            "--template",
            "tomorrow",
            "--toggle",
            "s",
            "--student",
            "s1",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("all meals on 2025-01-10"))
        .stdout(contains("breakfast, lunch on 2025-01-11"))
        .stdout(contains("Dry run"));

    rti()
        .args(["--db", &db_path, "--test", "--now", NOW, "list", "--student", "s1"])
        .assert()
        .success()
        .stdout(contains("No pauses recorded for s1"));
}

#[test]
fn test_tomorrow_after_cutoff_fails() {
    let db_path = setup_test_db("cli_cutoff");
    init_db(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            "2025-01-09 18:30",
            "pause",
            "--template",
            "tomorrow",
        ])
        .assert()
        .failure()
        .stderr(contains("Deadline passed"));
}

#[test]
fn test_invalid_custom_range_fails() {
    let db_path = setup_test_db("cli_range");
    init_db(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "pause",
            "--template",
            "custom",
            "--start",
            "2025-01-12",
            "--end",
            "2025-01-11",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "pause",
            "--template",
            "custom",
            "--start",
            "2025-01-12",
        ])
        .assert()
        .failure()
        .stderr(contains("Missing argument"));
}

#[test]
fn test_list_schedule_and_report() {
    let db_path = setup_test_db("cli_views");
    init_db(&db_path);
    pause_scenario_b(&db_path);

    rti()
        .args(["--db", &db_path, "--test", "--now", NOW, "list", "--student", "s1"])
        .assert()
        .success()
        .stdout(contains("Upcoming pauses for s1 (9)"))
        .stdout(contains("OUT-7"));

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "schedule",
            "--student",
            "s1",
            "--from",
            "2025-01-10",
            "--days",
            "4",
        ])
        .assert()
        .success()
        .stdout(contains("Fri 2025-01-10"))
        .stdout(contains("13 of 16 meals paused"));

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "report",
            "--date",
            "2025-01-11",
        ])
        .assert()
        .success()
        .stdout(contains("Students with a pause : 1"))
        .stdout(contains("Total meals paused    : 4"));

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "report",
            "--date",
            "2025-01-13",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"total_meals_paused\": 1"));
}

#[test]
fn test_cancel_and_log() {
    let db_path = setup_test_db("cli_cancel");
    init_db(&db_path);
    pause_scenario_b(&db_path);

    rti()
        .args(["--db", &db_path, "--test", "--now", NOW, "cancel", "1"])
        .assert()
        .success()
        .stdout(contains("Cancelled pause #1"));

    rti()
        .args(["--db", &db_path, "--test", "--now", NOW, "cancel", "1"])
        .assert()
        .failure()
        .stderr(contains("already in the past or inactive"));

    rti()
        .args(["--db", &db_path, "--test", "--now", NOW, "cancel", "4242"])
        .assert()
        .failure()
        .stderr(contains("Pause #4242 not found"));

    rti()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("pause").and(contains("cancel")));

    rti()
        .args(["--db", &db_path, "--test", "log", "--print", "--op", "cancel"])
        .assert()
        .success()
        .stdout(contains("Cancelled pause #1"))
        .stdout(contains("migration_applied").not());
}

#[test]
fn test_cancel_after_edit_deadline_is_locked() {
    let db_path = setup_test_db("cli_cancel_locked");
    init_db(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "--now",
            NOW,
            "pause",
            "--template",
            "custom",
            "--start",
            "2025-01-10",
            "--end",
            "2025-01-10",
            "--student",
            "s1",
        ])
        .assert()
        .success()
        .stdout(contains("4 record(s) created"));

    // Record 2 is lunch; its edit deadline is 10:30.
    rti()
        .args(["--db", &db_path, "--test", "--now", "2025-01-10 11:00", "cancel", "2"])
        .assert()
        .failure()
        .stderr(contains("can no longer be cancelled"));

    rti()
        .args(["--db", &db_path, "--test", "--now", "2025-01-10 10:00", "cancel", "2"])
        .assert()
        .success();
}

#[test]
fn test_meals_shows_status() {
    rti()
        .args(["--test", "--now", "2025-01-09 12:45", "meals"])
        .assert()
        .success()
        .stdout(contains("lunch"))
        .stdout(contains("Started"))
        .stdout(contains("next"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db(&db_path);
    pause_scenario_b(&db_path);

    let csv_out = temp_out("cli_export", "csv");
    rti()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &csv_out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&csv_out).expect("csv written");
    assert!(content.starts_with("id,student_id,meal,start_date,end_date"));
    assert!(content.contains("s1,breakfast,2025-01-13,2025-01-13"));
    assert_eq!(content.lines().count(), 10);

    let json_out = temp_out("cli_export", "json");
    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--format",
            "json",
            "--file",
            &json_out,
            "--student",
            "s1",
            "--force",
        ])
        .assert()
        .success();

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("json written"))
            .expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(9));
    assert_eq!(rows[0]["source_ref"], "OUT-7");
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_rel");
    init_db(&db_path);

    rti()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
