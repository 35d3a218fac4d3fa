//! Logging sets and editing session notes.

use log::debug;

use super::WorkoutContext;
use crate::{
    api::WorkoutApi,
    error::{Result, SessionError},
    models::{ExerciseLogEntry, SetInput},
    store::KeyValueStore,
};

impl<A: WorkoutApi, K: KeyValueStore> WorkoutContext<A, K> {
    /// Records the sets performed for `exercise_ref`, replacing anything
    /// logged for it before.
    ///
    /// Weights and reps are coerced leniently; malformed values become 0.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` when idle.
    pub fn log_set(&mut self, exercise_ref: &str, sets: &[SetInput]) -> Result<&ExerciseLogEntry> {
        self.active_mut()?.upsert_entry(exercise_ref, sets);
        self.persist();
        debug!("Logged {} set(s) for '{exercise_ref}'", sets.len());

        self.snapshot
            .as_ref()
            .and_then(|s| s.entry(exercise_ref))
            .ok_or(SessionError::NoActiveSession)
    }

    /// Records the sets performed for the exercise under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` when idle.
    pub fn log_current(&mut self, sets: &[SetInput]) -> Result<&ExerciseLogEntry> {
        let exercise_ref = self
            .current_exercise()
            .map(|e| e.exercise_ref.clone())
            .ok_or(SessionError::NoActiveSession)?;
        self.log_set(&exercise_ref, sets)
    }

    /// Replaces the session notes. No length limit applies.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` when idle.
    pub fn set_notes(&mut self, text: impl Into<String>) -> Result<()> {
        self.active_mut()?.notes = Some(text.into());
        self.persist();
        Ok(())
    }
}
