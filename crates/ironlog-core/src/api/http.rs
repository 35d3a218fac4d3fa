//! HTTP implementation of [`WorkoutApi`] over the backend's JSON REST API.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{StatusCode, Url};

use super::WorkoutApi;
use crate::{
    error::{Result, ResultExt, SessionError},
    models::{LogPayload, LogRecord, WorkoutDefinition},
};

const BODY_PREVIEW_LIMIT: usize = 512;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the workout backend.
#[derive(Clone)]
pub struct HttpWorkoutApi {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl HttpWorkoutApi {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:3000/api`).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Configuration` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .with_context("Failed to build HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            base_url,
            token: None,
            http,
        })
    }

    /// Sends `token` as a bearer credential on every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/workouts/{id}` with the id encoded as a single path segment.
    fn workout_url(&self, workout_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| SessionError::Configuration {
            message: format!("Invalid API URL '{}': {e}", self.base_url),
        })?;
        url.path_segments_mut()
            .map_err(|()| SessionError::Configuration {
                message: format!("API URL '{}' cannot have a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(["workouts", workout_id]);
        Ok(url)
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl WorkoutApi for HttpWorkoutApi {
    async fn fetch_workout(&self, workout_id: &str) -> Result<WorkoutDefinition> {
        // Dot segments are dropped when building the path
        if matches!(workout_id.trim(), "" | "." | "..") {
            return Err(SessionError::NotFound {
                workout_id: workout_id.to_string(),
            });
        }
        let url = self.workout_url(workout_id)?;
        debug!("GET {url}");

        let fetch_error = |message: String| SessionError::Fetch { message };

        let resp = self
            .auth(self.http.get(url.clone()))
            .send()
            .await
            .map_err(|e| fetch_error(format!("{url}: {e}")))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| fetch_error(format!("{url}: {e}")))?;
        debug!("GET {url} -> {status}");

        if status == StatusCode::NOT_FOUND {
            return Err(SessionError::NotFound {
                workout_id: workout_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(fetch_error(format!(
                "{url} returned {status}: {}",
                preview_body(&body)
            )));
        }

        serde_json::from_str::<WorkoutDefinition>(&body).map_err(|e| {
            fetch_error(format!(
                "{url} returned an unreadable workout ({e}): {}",
                preview_body(&body)
            ))
        })
    }

    async fn create_log(&self, payload: &LogPayload) -> Result<LogRecord> {
        let url = format!("{}/logs", self.base_url);
        debug!(
            "POST {url} workout={} exercises={} duration={}min",
            payload.workout_id,
            payload.exercises.len(),
            payload.duration_minutes
        );

        let submission_error = |message: String| SessionError::Submission { message };

        let resp = self
            .auth(self.http.post(&url).json(payload))
            .send()
            .await
            .map_err(|e| submission_error(format!("{url}: {e}")))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| submission_error(format!("{url}: {e}")))?;
        debug!("POST {url} -> {status}");

        if !status.is_success() {
            return Err(submission_error(format!(
                "{url} returned {status}: {}",
                preview_body(&body)
            )));
        }

        if body.trim().is_empty() {
            return Ok(LogRecord::default());
        }

        // A 2xx means the record exists, whatever the body looks like.
        Ok(serde_json::from_str::<LogRecord>(&body).unwrap_or_else(|e| {
            warn!("Log created but response body was not a JSON object: {e}");
            LogRecord::default()
        }))
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let mut out: String = trimmed.chars().take(BODY_PREVIEW_LIMIT).collect();
    if trimmed.chars().count() > BODY_PREVIEW_LIMIT {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::{error::ErrorKind, models::{LogExercise, LogSet}};

    fn client(server: &Server) -> HttpWorkoutApi {
        HttpWorkoutApi::new(server.url(), Duration::from_secs(2)).unwrap()
    }

    fn sample_payload() -> LogPayload {
        LogPayload {
            workout_id: "w1".to_string(),
            date: "2024-03-01T18:00:00Z".to_string(),
            duration_minutes: 45,
            notes: String::new(),
            exercises: vec![LogExercise {
                exercise_id: "squat".to_string(),
                sets: vec![LogSet {
                    weight: 100.0,
                    reps: 5,
                }],
            }],
        }
    }

    #[test]
    fn test_preview_body_empty() {
        assert_eq!(preview_body("   "), "<empty body>");
    }

    #[test]
    fn test_preview_body_truncates() {
        let body = "a".repeat(BODY_PREVIEW_LIMIT + 10);
        let preview = preview_body(&body);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.len(), BODY_PREVIEW_LIMIT + 3);
    }

    #[test]
    fn test_trailing_slash_and_blank_token_are_normalized() {
        let api = HttpWorkoutApi::new("http://localhost:3000/api/", DEFAULT_TIMEOUT)
            .unwrap()
            .with_token(Some("  ".to_string()));
        assert_eq!(api.base_url(), "http://localhost:3000/api");
        assert!(api.token.is_none());
    }

    #[tokio::test]
    async fn test_fetch_workout_parses_definition() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/workouts/w1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "w1",
                    "name": "Pull",
                    "exercises": [
                        { "exerciseRef": "deadlift", "targetSets": 3, "targetReps": 5, "targetRestSeconds": 180 }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let workout = client(&server).fetch_workout("w1").await.unwrap();
        assert_eq!(workout.name, "Pull");
        assert_eq!(workout.exercises[0].exercise_ref, "deadlift");
    }

    #[tokio::test]
    async fn test_fetch_workout_sends_bearer_token() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/workouts/w1")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_body(r#"{"id":"w1","name":"Pull","exercises":[]}"#)
            .create_async()
            .await;

        client(&server)
            .with_token(Some("secret".to_string()))
            .fetch_workout("w1")
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_workout_404_is_not_found() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/workouts/missing")
            .with_status(404)
            .create_async()
            .await;

        let err = client(&server).fetch_workout("missing").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_workout_keeps_id_in_one_path_segment() {
        let mut server = Server::new_async().await;
        let existing = server
            .mock("GET", "/workouts/w1")
            .with_status(200)
            .with_body(r#"{"id":"w1","name":"Pull","exercises":[]}"#)
            .expect(0)
            .create_async()
            .await;
        let _others = server
            .mock("GET", Matcher::Regex(r"^/workouts/(nope|w1.)".to_string()))
            .with_status(404)
            .create_async()
            .await;

        let api = client(&server);
        for id in ["nope/../w1", "w1#frag", "w1?x=1", "..", ""] {
            let err = api.fetch_workout(id).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound, "id {id:?}");
        }
        existing.assert_async().await;
    }

    #[test]
    fn test_workout_url_encodes_reserved_characters() {
        let api = HttpWorkoutApi::new("http://localhost:3000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            api.workout_url("a/b?c#d").unwrap().as_str(),
            "http://localhost:3000/api/workouts/a%2Fb%3Fc%23d"
        );
        let root = HttpWorkoutApi::new("http://localhost:3000", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            root.workout_url("w1").unwrap().as_str(),
            "http://localhost:3000/workouts/w1"
        );
    }

    #[tokio::test]
    async fn test_fetch_workout_server_error_is_fetch_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/workouts/w1")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = client(&server).fetch_workout("w1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_fetch_workout_bad_json_is_fetch_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/workouts/w1")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let err = client(&server).fetch_workout("w1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fetch);
    }

    #[tokio::test]
    async fn test_create_log_posts_payload() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/logs")
            .match_body(Matcher::PartialJson(json!({
                "workoutId": "w1",
                "duree": 45,
                "notes": "",
                "exercices": [{ "exerciceId": "squat", "series": [{ "poids": 100.0, "reps": 5 }] }]
            })))
            .with_status(201)
            .with_body(r#"{"_id":"log-9","workoutId":"w1"}"#)
            .create_async()
            .await;

        let record = client(&server).create_log(&sample_payload()).await.unwrap();
        assert_eq!(record.id.as_deref(), Some("log-9"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_log_accepts_empty_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/logs")
            .with_status(204)
            .create_async()
            .await;

        let record = client(&server).create_log(&sample_payload()).await.unwrap();
        assert_eq!(record, LogRecord::default());
    }

    #[tokio::test]
    async fn test_create_log_failure_is_submission_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/logs")
            .with_status(422)
            .with_body(r#"{"message":"invalid"}"#)
            .expect(1)
            .create_async()
            .await;

        let err = client(&server)
            .create_log(&sample_payload())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Submission);
        assert!(err.to_string().contains("422"));
    }
}
