use std::path::Path;

use ironlog_core::{ContextBuilder, HttpWorkoutApi, SqliteKeyValueStore, WorkoutContext};
use serde_json::json;

pub type TestContext = WorkoutContext<HttpWorkoutApi, SqliteKeyValueStore>;

/// Helper function to build a context against a mock backend
pub async fn create_test_context(db_path: &Path, api_url: &str) -> TestContext {
    ContextBuilder::new()
        .with_database_path(Some(db_path))
        .with_api_url(api_url)
        .build()
        .await
        .expect("Failed to create context")
}

/// Three-exercise workout served by the mock backend
pub fn workout_body() -> String {
    json!({
        "_id": "w1",
        "name": "Full body",
        "exercises": [
            { "exerciseRef": "A", "targetSets": 3, "targetReps": 10, "targetRestSeconds": 90 },
            { "exerciseRef": "B", "targetSets": 3, "targetReps": 10, "targetRestSeconds": 90 },
            { "exerciseRef": "C", "targetSets": 4, "targetReps": 8, "targetRestSeconds": 120, "notes": "last one" }
        ]
    })
    .to_string()
}
