//! Log-creation request and response bodies.
//!
//! Field names on the wire follow the backend's schema (`duree`,
//! `exercices`, `series`, `poids`); the Rust names are descriptive.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SessionSnapshot;
use crate::error::{Result, SessionError};

/// Body of the log-creation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogPayload {
    #[serde(rename = "workoutId")]
    pub workout_id: String,

    /// Session start as an ISO-8601 string
    pub date: String,

    /// Duration in whole minutes, at least 1
    #[serde(rename = "duree")]
    pub duration_minutes: u32,

    pub notes: String,

    #[serde(rename = "exercices")]
    pub exercises: Vec<LogExercise>,
}

/// One exercise in a log payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogExercise {
    #[serde(rename = "exerciceId")]
    pub exercise_id: String,

    #[serde(rename = "series")]
    pub sets: Vec<LogSet>,
}

/// One set in a log payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LogSet {
    #[serde(rename = "poids")]
    pub weight: f64,
    pub reps: u32,
}

impl LogPayload {
    /// Builds the payload for a finished session.
    ///
    /// `elapsed_minutes` is clamped up to 1 so no zero-length record is ever
    /// created.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` if nothing was logged.
    pub fn from_snapshot(snapshot: &SessionSnapshot, elapsed_minutes: i64) -> Result<Self> {
        if snapshot.entries.is_empty() {
            return Err(SessionError::EmptySession);
        }

        let exercises = snapshot
            .entries
            .iter()
            .map(|entry| LogExercise {
                exercise_id: entry.exercise_ref.clone(),
                sets: entry
                    .sets
                    .iter()
                    .map(|s| LogSet {
                        weight: s.weight,
                        reps: s.reps,
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            workout_id: snapshot.workout.id.clone(),
            date: snapshot.started_at.to_string(),
            duration_minutes: u32::try_from(elapsed_minutes.max(1)).unwrap_or(u32::MAX),
            notes: snapshot.notes.clone().unwrap_or_default(),
            exercises,
        })
    }
}

/// Record returned by the backend after a log was created.
///
/// Only the identifier is interpreted; every other field is kept verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogRecord {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
