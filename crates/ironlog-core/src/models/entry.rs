//! Logged sets and per-exercise log entries.
//!
//! Sets reach the core as [`SetInput`], i.e. whatever the user typed. They are
//! coerced to [`SetResult`] leniently: anything that does not read as a
//! finite, non-negative number becomes `0`. Malformed input is never rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A set as entered by the user, before numeric coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SetInput {
    #[serde(default)]
    pub weight: Value,
    #[serde(default)]
    pub reps: Value,
}

impl SetInput {
    /// A well-formed set.
    pub fn new(weight: f64, reps: u32) -> Self {
        Self::raw(weight, reps)
    }

    /// A set from arbitrary raw values (numbers, strings, null...).
    pub fn raw(weight: impl Into<Value>, reps: impl Into<Value>) -> Self {
        Self {
            weight: weight.into(),
            reps: reps.into(),
        }
    }
}

/// One performed set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SetResult {
    /// Load in the user's unit, never negative
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
}

impl From<&SetInput> for SetResult {
    fn from(input: &SetInput) -> Self {
        Self {
            weight: coerce_number(&input.weight),
            reps: coerce_number(&input.reps).trunc() as u32,
        }
    }
}

/// All sets performed for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    pub exercise_ref: String,
    #[serde(default)]
    pub sets: Vec<SetResult>,
}

impl ExerciseLogEntry {
    /// Builds an entry, coercing every raw set.
    pub fn from_inputs(exercise_ref: impl Into<String>, inputs: &[SetInput]) -> Self {
        Self {
            exercise_ref: exercise_ref.into(),
            sets: inputs.iter().map(SetResult::from).collect(),
        }
    }

    /// Sum of weight × reps across all sets.
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(|s| s.weight * f64::from(s.reps)).sum()
    }
}

/// Reads a JSON value as a finite, non-negative number, defaulting to 0.
pub(crate) fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match n {
        Some(n) if n.is_finite() && n >= 0.0 => n,
        _ => 0.0,
    }
}
