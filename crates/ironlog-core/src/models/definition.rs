//! Workout definition model as served by the backend.

use serde::{Deserialize, Serialize};

/// Represents a workout template: an ordered list of planned exercises.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDefinition {
    /// Backend identifier of the workout
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name of the workout
    pub name: String,

    /// Planned exercises in the order they are performed
    #[serde(default)]
    pub exercises: Vec<ExercisePlan>,
}

/// Target prescription for one exercise within a workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePlan {
    /// Reference to the exercise in the user's library
    pub exercise_ref: String,

    /// Number of sets to perform
    #[serde(default)]
    pub target_sets: u32,

    /// Repetitions per set
    #[serde(default)]
    pub target_reps: u32,

    /// Rest between sets, in seconds
    #[serde(default)]
    pub target_rest_seconds: u32,

    /// Optional coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExercisePlan {
    /// Creates a plan entry without notes.
    pub fn new(
        exercise_ref: impl Into<String>,
        target_sets: u32,
        target_reps: u32,
        target_rest_seconds: u32,
    ) -> Self {
        Self {
            exercise_ref: exercise_ref.into(),
            target_sets,
            target_reps,
            target_rest_seconds,
            notes: None,
        }
    }
}

impl WorkoutDefinition {
    /// Returns the planned exercise at `index`, if any.
    pub fn exercise(&self, index: usize) -> Option<&ExercisePlan> {
        self.exercises.get(index)
    }

    /// Number of planned exercises.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the workout has no exercises at all.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
