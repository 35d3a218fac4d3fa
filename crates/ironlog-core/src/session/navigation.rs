//! Moving the current-exercise cursor.

use log::debug;

use super::WorkoutContext;
use crate::{api::WorkoutApi, error::Result, store::KeyValueStore};

impl<A: WorkoutApi, K: KeyValueStore> WorkoutContext<A, K> {
    /// Moves to the next exercise.
    ///
    /// Returns `Ok(false)` and leaves the cursor alone when already on the
    /// last exercise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` when idle.
    pub fn advance(&mut self) -> Result<bool> {
        let moved = self.active_mut()?.advance();
        self.after_move(moved);
        Ok(moved)
    }

    /// Moves to the previous exercise.
    ///
    /// Returns `Ok(false)` and leaves the cursor alone when already on the
    /// first exercise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` when idle.
    pub fn retreat(&mut self) -> Result<bool> {
        let moved = self.active_mut()?.retreat();
        self.after_move(moved);
        Ok(moved)
    }

    /// Moves to the exercise at 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` when idle and
    /// `SessionError::InvalidInput` if `index` is out of range.
    pub fn jump_to(&mut self, index: i64) -> Result<()> {
        self.active_mut()?.jump_to(index)?;
        self.after_move(true);
        Ok(())
    }

    fn after_move(&self, moved: bool) {
        if moved {
            debug!(
                "Current exercise index is now {}",
                self.snapshot.as_ref().map_or(0, |s| s.current_index)
            );
            self.persist();
        }
    }
}
