//! Backend adapters: workout retrieval and log creation.
//!
//! The state machine only talks to the backend through [`WorkoutApi`], so it
//! can be driven by the HTTP client in production and by an in-process fake
//! under test.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{LogPayload, LogRecord, WorkoutDefinition},
};

pub mod http;

pub use http::HttpWorkoutApi;

/// Remote operations a workout session depends on.
#[async_trait]
pub trait WorkoutApi: Send + Sync {
    /// Retrieves a workout definition.
    ///
    /// # Errors
    ///
    /// `SessionError::NotFound` when the identifier does not resolve,
    /// `SessionError::Fetch` for any other failure.
    async fn fetch_workout(&self, workout_id: &str) -> Result<WorkoutDefinition>;

    /// Creates a log record. Called exactly once per attempt; never retried.
    ///
    /// # Errors
    ///
    /// `SessionError::Submission` for any failure.
    async fn create_log(&self, payload: &LogPayload) -> Result<LogRecord>;
}
