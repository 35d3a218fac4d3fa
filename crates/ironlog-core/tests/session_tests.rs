mod common;

use common::{create_test_context, workout_body};
use ironlog_core::{ErrorKind, SessionState, SetInput};
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn test_session_survives_context_rebuild_and_finishes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("ironlog.db");
    let mut server = Server::new_async().await;
    let fetch = server
        .mock("GET", "/workouts/w1")
        .with_status(200)
        .with_body(workout_body())
        .expect(1)
        .create_async()
        .await;

    // First process: start and log some work
    let mut context = create_test_context(&db_path, &server.url()).await;
    context.start("w1").await.expect("Failed to start session");
    context
        .log_current(&vec![SetInput::new(20.0, 10); 3])
        .expect("Failed to log sets");
    assert!(context.advance().unwrap());
    context
        .log_current(&vec![SetInput::raw(0, "10"); 3])
        .expect("Failed to log sets");
    let before_restart = context.snapshot().cloned();
    drop(context);

    // Second process: the session is resumed from disk without a fetch
    let mut context = create_test_context(&db_path, &server.url()).await;
    assert_eq!(context.state(), SessionState::InProgress);
    assert_eq!(context.snapshot().cloned(), before_restart);
    fetch.assert_async().await;

    let submit = server
        .mock("POST", "/logs")
        .match_body(Matcher::PartialJson(json!({
            "workoutId": "w1",
            "notes": "",
            "duree": 1
        })))
        .with_status(201)
        .with_body(r#"{"_id":"log-1"}"#)
        .expect(1)
        .create_async()
        .await;

    let finished = context.finish().await.expect("Failed to finish session");
    assert_eq!(finished.payload.exercises.len(), 2);
    assert_eq!(finished.record.id.as_deref(), Some("log-1"));
    assert_eq!(context.state(), SessionState::Idle);
    submit.assert_async().await;

    // Third process: nothing left to resume
    let context = create_test_context(&db_path, &server.url()).await;
    assert_eq!(context.state(), SessionState::Idle);
    assert!(context.store().load().is_none());
}

#[tokio::test]
async fn test_unknown_workout_leaves_store_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("ironlog.db");
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/workouts/nope")
        .with_status(404)
        .create_async()
        .await;

    let mut context = create_test_context(&db_path, &server.url()).await;
    let err = context.start("nope").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(context.state(), SessionState::Idle);
    assert!(context.store().load().is_none());
}

#[tokio::test]
async fn test_failed_submission_is_still_resumable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("ironlog.db");
    let mut server = Server::new_async().await;
    let _fetch = server
        .mock("GET", "/workouts/w1")
        .with_status(200)
        .with_body(workout_body())
        .create_async()
        .await;
    let _submit = server
        .mock("POST", "/logs")
        .with_status(500)
        .with_body("database down")
        .expect(1)
        .create_async()
        .await;

    let mut context = create_test_context(&db_path, &server.url()).await;
    context.start("w1").await.unwrap();
    context.log_set("A", &[SetInput::new(20.0, 10)]).unwrap();
    context.set_notes("retry later").unwrap();

    let err = context.finish().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Submission);
    drop(context);

    let context = create_test_context(&db_path, &server.url()).await;
    let snapshot = context.snapshot().expect("session should be resumable");
    assert_eq!(snapshot.notes.as_deref(), Some("retry later"));
    assert_eq!(snapshot.entries.len(), 1);
}

#[tokio::test]
async fn test_abandon_clears_disk_copy() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("ironlog.db");
    let mut server = Server::new_async().await;
    let _fetch = server
        .mock("GET", "/workouts/w1")
        .with_status(200)
        .with_body(workout_body())
        .create_async()
        .await;

    let mut context = create_test_context(&db_path, &server.url()).await;
    context.start("w1").await.unwrap();
    context.log_set("A", &[SetInput::new(20.0, 10)]).unwrap();
    context.abandon().unwrap();
    drop(context);

    let context = create_test_context(&db_path, &server.url()).await;
    assert_eq!(context.state(), SessionState::Idle);
}
