use mealpause::core::decompose::PauseRequest;
use mealpause::core::pause::PauseLogic;
use mealpause::core::span::default_cutoff;
use mealpause::core::submit::PauseStore;
use mealpause::db::initialize::init_db;
use mealpause::db::pool::DbPool;
use mealpause::db::queries::load_active_on_date;
use mealpause::db::store::SqlitePauseStore;
use mealpause::errors::{AppError, AppResult, RuleViolation};
use mealpause::models::command::PauseCommand;
use mealpause::models::meal_kind::MealKind;
use mealpause::models::pause_record::PauseRecord;
use mealpause::models::resume_point::ResumePoint;
use mealpause::models::template::PauseTemplate;
use chrono::NaiveDateTime;
use rusqlite::Connection;

mod common;
use common::{at, d};

fn memory_pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

#[test]
fn test_create_pause_writes_one_record_per_meal() {
    let mut pool = memory_pool();
    let mut store = SqlitePauseStore::new(&mut pool);

    let cmd = PauseCommand::new(
        &[MealKind::Lunch, MealKind::Breakfast],
        d("2025-01-10"),
        d("2025-01-12"),
    );
    let records = store
        .create_pause("s1", &cmd, PauseTemplate::Custom, Some("OUT-42"))
        .expect("insert");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].meal, MealKind::Breakfast);
    assert_eq!(records[1].meal, MealKind::Lunch);
    assert!(records.iter().all(|r| r.is_active && r.days() == 3));

    let listed = store.list_pauses("s1").expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].source_ref.as_deref(), Some("OUT-42"));
    assert!(store.list_pauses("someone-else").expect("list").is_empty());
}

#[test]
fn test_store_rejects_overlapping_create() {
    let mut pool = memory_pool();
    let mut store = SqlitePauseStore::new(&mut pool);

    let cmd = PauseCommand::full_day(d("2025-01-10"), d("2025-01-12"));
    store
        .create_pause("s1", &cmd, PauseTemplate::Custom, None)
        .expect("first insert");

    let again = PauseCommand::new(&[MealKind::Dinner], d("2025-01-12"), d("2025-01-14"));
    match store.create_pause("s1", &again, PauseTemplate::Custom, None) {
        Err(AppError::Rule(RuleViolation::AlreadyPaused { cells })) => {
            assert_eq!(cells, vec![(MealKind::Dinner, d("2025-01-12"))]);
        }
        other => panic!("expected AlreadyPaused, got {other:?}"),
    }

    // Another student is unaffected.
    assert!(store
        .create_pause("s2", &again, PauseTemplate::Custom, None)
        .is_ok());
}

#[test]
fn test_batch_is_all_or_nothing() {
    let mut pool = memory_pool();
    let mut store = SqlitePauseStore::new(&mut pool);

    let existing = PauseCommand::new(&[MealKind::Dinner], d("2025-01-12"), d("2025-01-12"));
    store
        .create_pause("s1", &existing, PauseTemplate::Custom, None)
        .expect("seed");

    let batch = vec![
        PauseCommand::full_day(d("2025-01-10"), d("2025-01-10")),
        PauseCommand::full_day(d("2025-01-11"), d("2025-01-12")),
    ];
    let result = store.create_batch("s1", &batch, PauseTemplate::Custom, None);
    assert!(matches!(
        result,
        Err(AppError::Rule(RuleViolation::AlreadyPaused { .. }))
    ));

    // The first command was rolled back with the rest.
    let listed = store.list_pauses("s1").expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].meal, MealKind::Dinner);
}

#[test]
fn test_apply_scenario_b_and_repeat() {
    let mut pool = memory_pool();
    let mut store = SqlitePauseStore::new(&mut pool);
    let now = at("2025-01-09 10:00:00");

    let req = PauseRequest {
        template: PauseTemplate::Custom,
        start: d("2025-01-10"),
        end: d("2025-01-13"),
        resume_point: ResumePoint::from_meal(MealKind::Lunch),
    };

    let records = PauseLogic::apply(&mut store, "s1", &req, now, default_cutoff(), None)
        .expect("apply");
    assert_eq!(records.len(), 9);

    let again = PauseLogic::apply(&mut store, "s1", &req, now, default_cutoff(), None);
    assert!(matches!(
        again,
        Err(AppError::Rule(RuleViolation::AlreadyPaused { .. }))
    ));
    assert_eq!(store.list_pauses("s1").expect("list").len(), 9);
}

#[test]
fn test_cancel_future_and_repeat() {
    let mut pool = memory_pool();
    let mut store = SqlitePauseStore::new(&mut pool);

    let cmd = PauseCommand::new(&[MealKind::Breakfast], d("2025-01-15"), d("2025-01-16"));
    let created = store
        .create_pause("s1", &cmd, PauseTemplate::Custom, None)
        .expect("insert");
    let id = created[0].id;

    let cancelled = store
        .cancel_pause(id, at("2025-01-14 23:00:00"))
        .expect("future pause can be cancelled");
    assert!(!cancelled.is_active);
    assert!(store.list_active_pauses("s1").expect("list").is_empty());

    assert!(matches!(
        store.cancel_pause(id, at("2025-01-14 23:00:00")),
        Err(AppError::PauseImmutable(_))
    ));
}

#[test]
fn test_cancel_today_honours_edit_deadline() {
    let mut pool = memory_pool();
    let mut store = SqlitePauseStore::new(&mut pool);

    let cmd = PauseCommand::new(&[MealKind::Lunch], d("2025-01-09"), d("2025-01-11"));
    let id = store
        .create_pause("s1", &cmd, PauseTemplate::Custom, None)
        .expect("insert")[0]
        .id;

    match store.cancel_pause(id, at("2025-01-10 11:00:00")) {
        Err(AppError::CancelLocked { meal, .. }) => assert_eq!(meal, MealKind::Lunch),
        other => panic!("expected CancelLocked, got {other:?}"),
    }

    assert!(store.cancel_pause(id, at("2025-01-10 10:00:00")).is_ok());
}

#[test]
fn test_cancel_unknown_and_past() {
    let mut pool = memory_pool();
    let mut store = SqlitePauseStore::new(&mut pool);

    assert!(matches!(
        store.cancel_pause(999, at("2025-01-10 10:00:00")),
        Err(AppError::PauseNotFound(999))
    ));

    let cmd = PauseCommand::full_day(d("2025-01-01"), d("2025-01-02"));
    let id = store
        .create_pause("s1", &cmd, PauseTemplate::Custom, None)
        .expect("insert")[0]
        .id;
    assert!(matches!(
        store.cancel_pause(id, at("2025-01-10 10:00:00")),
        Err(AppError::PauseImmutable(_))
    ));
}

#[test]
fn test_active_on_date_spans_students() {
    let mut pool = memory_pool();
    {
        let mut store = SqlitePauseStore::new(&mut pool);
        let cmd = PauseCommand::new(&[MealKind::Dinner], d("2025-01-10"), d("2025-01-12"));
        store
            .create_pause("s1", &cmd, PauseTemplate::Custom, None)
            .expect("insert");
        store
            .create_pause("s2", &cmd, PauseTemplate::Custom, None)
            .expect("insert");
    }

    let on_date = load_active_on_date(&pool.conn, &d("2025-01-11")).expect("query");
    assert_eq!(on_date.len(), 2);
    assert!(load_active_on_date(&pool.conn, &d("2025-01-13"))
        .expect("query")
        .is_empty());
}

#[test]
fn test_migrations_are_recorded_once() {
    let pool = memory_pool();
    init_db(&pool.conn).expect("second run is a no-op");

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(applied, 2);
}

#[test]
fn test_legacy_schema_gains_source_ref() {
    let conn = Connection::open_in_memory().expect("open");
    conn.execute_batch(
        "CREATE TABLE pauses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id TEXT NOT NULL,
            meal TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            template TEXT NOT NULL DEFAULT 'custom',
            created_at TEXT NOT NULL
        );
        INSERT INTO pauses (student_id, meal, start_date, end_date, created_at)
        VALUES ('s1', 'lunch', '2025-01-10', '2025-01-10', '2025-01-01T00:00:00Z');",
    )
    .expect("legacy schema");

    init_db(&conn).expect("migrate");

    let mut pool = DbPool { conn };
    let records = SqlitePauseStore::new(&mut pool)
        .list_pauses("s1")
        .expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_ref, None);
}

/// Store without transactions that fails on the n-th create call.
struct FlakyStore {
    records: Vec<PauseRecord>,
    fail_on: usize,
    calls: usize,
}

impl FlakyStore {
    fn new(fail_on: usize) -> Self {
        Self {
            records: Vec::new(),
            fail_on,
            calls: 0,
        }
    }
}

impl PauseStore for FlakyStore {
    fn list_pauses(&self, student_id: &str) -> AppResult<Vec<PauseRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect())
    }

    fn create_pause(
        &mut self,
        student_id: &str,
        command: &PauseCommand,
        template: PauseTemplate,
        source_ref: Option<&str>,
    ) -> AppResult<Vec<PauseRecord>> {
        let call = self.calls;
        self.calls += 1;
        if call == self.fail_on {
            return Err(AppError::Other("network down".into()));
        }

        let mut out = Vec::new();
        for meal in &command.meals {
            let r = PauseRecord {
                id: self.records.len() as i64 + 1,
                student_id: student_id.to_string(),
                meal: *meal,
                start_date: command.start,
                end_date: command.end,
                is_active: true,
                template,
                source_ref: source_ref.map(str::to_string),
                created_at: String::new(),
            };
            self.records.push(r.clone());
            out.push(r);
        }
        Ok(out)
    }

    fn cancel_pause(&mut self, id: i64, _now: NaiveDateTime) -> AppResult<PauseRecord> {
        Err(AppError::PauseNotFound(id))
    }
}

fn scenario_b_commands() -> Vec<PauseCommand> {
    vec![
        PauseCommand::full_day(d("2025-01-10"), d("2025-01-10")),
        PauseCommand::full_day(d("2025-01-11"), d("2025-01-12")),
        PauseCommand::new(&[MealKind::Breakfast], d("2025-01-13"), d("2025-01-13")),
    ]
}

#[test]
fn test_sequential_partial_failure_reports_committed_and_pending() {
    let mut store = FlakyStore::new(1);
    let commands = scenario_b_commands();

    match store.create_batch("s1", &commands, PauseTemplate::Custom, None) {
        Err(AppError::Rule(RuleViolation::PartialSubmissionFailure {
            committed,
            pending,
            reason,
        })) => {
            assert_eq!(committed.len(), 4);
            assert_eq!(pending, commands[1..].to_vec());
            assert!(reason.contains("network down"));
        }
        other => panic!("expected PartialSubmissionFailure, got {other:?}"),
    }

    // No retry: the failed command is not attempted twice.
    assert_eq!(store.calls, 2);
    assert_eq!(store.records.len(), 4);
}

#[test]
fn test_sequential_failure_on_first_command_is_plain_error() {
    let mut store = FlakyStore::new(0);

    let result = store.create_batch("s1", &scenario_b_commands(), PauseTemplate::Custom, None);
    assert!(matches!(result, Err(AppError::Other(_))));
    assert!(store.records.is_empty());
}

#[test]
fn test_sequential_success_commits_everything() {
    let mut store = FlakyStore::new(usize::MAX);

    let records = store
        .create_batch("s1", &scenario_b_commands(), PauseTemplate::Custom, Some("OUT-1"))
        .expect("all commands succeed");
    assert_eq!(records.len(), 9);
    assert_eq!(store.list_active_pauses("s1").expect("list").len(), 9);
}
