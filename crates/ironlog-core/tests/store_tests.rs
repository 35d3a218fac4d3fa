use ironlog_core::{
    models::{ExercisePlan, SessionSnapshot, SetInput, WorkoutDefinition},
    store::SESSION_KEY,
    KeyValueStore, SessionStore, SqliteKeyValueStore,
};
use jiff::Timestamp;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_store() -> (NamedTempFile, SqliteKeyValueStore) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let store = SqliteKeyValueStore::open(temp_file.path()).expect("Failed to open test store");
    (temp_file, store)
}

fn create_test_snapshot() -> SessionSnapshot {
    let workout = WorkoutDefinition {
        id: "w1".to_string(),
        name: "Pull".to_string(),
        exercises: vec![
            ExercisePlan::new("deadlift", 3, 5, 180),
            ExercisePlan {
                notes: Some("overhand grip".to_string()),
                ..ExercisePlan::new("row", 4, 10, 90)
            },
        ],
    };
    let mut snapshot = SessionSnapshot::new(workout, Timestamp::from_second(1_700_000_000).unwrap());
    snapshot.upsert_entry(
        "deadlift",
        &[SetInput::new(140.0, 5), SetInput::new(142.5, 5), SetInput::raw("x", 4)],
    );
    snapshot.advance();
    snapshot.notes = Some("Ünïcödé notes\nwith a second line".to_string());
    snapshot
}

#[test]
fn test_snapshot_round_trips_through_sqlite() {
    let (_temp_file, store) = create_test_store();
    let sessions = SessionStore::new(store);
    let snapshot = create_test_snapshot();

    sessions.save(&snapshot);
    assert_eq!(sessions.load(), Some(snapshot));
}

#[test]
fn test_snapshot_survives_reopening_the_database() {
    let (temp_file, store) = create_test_store();
    let snapshot = create_test_snapshot();
    SessionStore::new(store).save(&snapshot);

    let reopened = SqliteKeyValueStore::open(temp_file.path()).expect("Failed to reopen store");
    assert_eq!(SessionStore::new(reopened).load(), Some(snapshot));
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let (_temp_file, store) = create_test_store();
    let sessions = SessionStore::new(store);
    let mut snapshot = create_test_snapshot();

    sessions.save(&snapshot);
    snapshot.retreat();
    sessions.save(&snapshot);

    assert_eq!(sessions.load().map(|s| s.current_index), Some(0));
}

#[test]
fn test_corrupt_row_is_treated_as_absent() {
    let (_temp_file, store) = create_test_store();
    store.set(SESSION_KEY, r#"{"workout": 12}"#).unwrap();

    let sessions = SessionStore::new(store);
    assert!(sessions.load().is_none());
    assert_eq!(sessions.backend().get(SESSION_KEY).unwrap(), None);
}

#[test]
fn test_clear_removes_row() {
    let (_temp_file, store) = create_test_store();
    let sessions = SessionStore::new(store);
    sessions.save(&create_test_snapshot());

    sessions.clear();
    assert!(sessions.load().is_none());
    assert!(sessions.backend().get(SESSION_KEY).unwrap().is_none());
}
