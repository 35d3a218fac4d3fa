//! Session snapshot: the unit of persistence for an active workout.

use std::collections::HashSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ExerciseLogEntry, ExercisePlan, SetInput, WorkoutDefinition};
use crate::error::{Result, SessionError};

/// Complete state of a workout session at a point in time.
///
/// The snapshot carries its own copy of the workout definition, taken when
/// the session started. Edits made to the workout on the backend afterwards
/// are not reflected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Definition the session was seeded from
    pub workout: WorkoutDefinition,

    /// Whether the session is still running
    pub in_progress: bool,

    /// 0-based position in `workout.exercises`
    pub current_index: usize,

    /// Logged exercises, unique by exercise reference
    #[serde(default)]
    pub entries: Vec<ExerciseLogEntry>,

    /// When the session was started (UTC); never changes afterwards
    pub started_at: Timestamp,

    /// Free-text session notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionSnapshot {
    /// Creates a fresh in-progress snapshot positioned on the first exercise.
    pub fn new(workout: WorkoutDefinition, started_at: Timestamp) -> Self {
        Self {
            workout,
            in_progress: true,
            current_index: 0,
            entries: Vec::new(),
            started_at,
            notes: None,
        }
    }

    /// The planned exercise under the cursor.
    pub fn current_exercise(&self) -> Option<&ExercisePlan> {
        self.workout.exercise(self.current_index)
    }

    /// Index of the last exercise.
    fn last_index(&self) -> usize {
        self.workout.len().saturating_sub(1)
    }

    /// Moves to the next exercise. Returns false at the last one.
    pub fn advance(&mut self) -> bool {
        if self.current_index >= self.last_index() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous exercise. Returns false at the first one.
    pub fn retreat(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Moves to an arbitrary exercise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if `index` is negative or past
    /// the last exercise; the cursor is left untouched.
    pub fn jump_to(&mut self, index: i64) -> Result<()> {
        match usize::try_from(index) {
            Ok(i) if i < self.workout.len() => {
                self.current_index = i;
                Ok(())
            }
            _ => Err(SessionError::invalid_input("index").with_reason(format!(
                "{index} is outside 0..={} for workout '{}'",
                self.last_index(),
                self.workout.name
            ))),
        }
    }

    /// Inserts or replaces the log entry for `exercise_ref`.
    ///
    /// A replaced entry keeps its position so the submission order follows
    /// the order in which exercises were first logged.
    pub fn upsert_entry(&mut self, exercise_ref: &str, inputs: &[SetInput]) -> &ExerciseLogEntry {
        let entry = ExerciseLogEntry::from_inputs(exercise_ref, inputs);
        let pos = match self
            .entries
            .iter()
            .position(|e| e.exercise_ref == exercise_ref)
        {
            Some(pos) => {
                self.entries[pos] = entry;
                pos
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        &self.entries[pos]
    }

    /// Looks up the entry logged for `exercise_ref`.
    pub fn entry(&self, exercise_ref: &str) -> Option<&ExerciseLogEntry> {
        self.entries.iter().find(|e| e.exercise_ref == exercise_ref)
    }

    /// Whole minutes between the start of the session and `now`, rounded to
    /// the nearest minute.
    pub fn elapsed_minutes(&self, now: Timestamp) -> i64 {
        let millis = now.as_millisecond() - self.started_at.as_millisecond();
        (millis as f64 / 60_000.0).round() as i64
    }

    /// Checks the structural invariants a persisted snapshot must satisfy to
    /// be resumed.
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::new();
        self.current_index < self.workout.len()
            && self
                .entries
                .iter()
                .all(|e| seen.insert(e.exercise_ref.as_str()))
    }
}
