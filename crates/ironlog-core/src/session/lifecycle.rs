//! Session lifecycle transitions: restore, start, finish and abandon.

use log::{debug, info, warn};

use super::{guard::InFlight, WorkoutContext};
use crate::{
    api::WorkoutApi,
    error::{Result, SessionError},
    models::{LogPayload, LogRecord, SessionSnapshot},
    store::KeyValueStore,
};

/// Outcome of a successful [`WorkoutContext::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedSession {
    /// Record created by the backend
    pub record: LogRecord,
    /// Body that was submitted
    pub payload: LogPayload,
    /// The session as it was when submitted
    pub snapshot: SessionSnapshot,
}

impl<A: WorkoutApi, K: KeyValueStore> WorkoutContext<A, K> {
    /// Loads the stored snapshot once and resumes it if it is in progress.
    ///
    /// The stored workout definition is trusted as-is: it is not compared
    /// with the backend's current version.
    pub(super) fn restore(&mut self) {
        match self.store.load() {
            Some(snapshot) if snapshot.in_progress => {
                info!(
                    "Resuming session for workout '{}' ({}) started at {}",
                    snapshot.workout.name, snapshot.workout.id, snapshot.started_at
                );
                self.snapshot = Some(snapshot);
            }
            Some(_) => {
                warn!("Discarding stored session snapshot that is no longer in progress");
                self.store.clear();
            }
            None => debug!("No stored session to resume"),
        }
    }

    /// Starts a session from the backend workout `workout_id`.
    ///
    /// # Errors
    ///
    /// - `SessionError::Busy` if another start or finish is in flight
    /// - `SessionError::Conflict` if a session is already in progress
    /// - `SessionError::NotFound` / `SessionError::Fetch` from the backend
    /// - `SessionError::InvalidInput` if the workout has no exercises
    pub async fn start(&mut self, workout_id: &str) -> Result<&SessionSnapshot> {
        let _in_flight = InFlight::acquire(&self.in_flight)?;

        if let Some(active) = &self.snapshot {
            return Err(SessionError::Conflict {
                workout_id: active.workout.id.clone(),
            });
        }

        let workout = self.api.fetch_workout(workout_id).await?;
        if workout.is_empty() {
            return Err(SessionError::invalid_input("workout")
                .with_reason(format!("workout '{}' has no exercises", workout.name)));
        }

        let snapshot = SessionSnapshot::new(workout, self.clock.now());
        self.store.save(&snapshot);
        info!(
            "Started session for workout '{}' ({}) with {} exercises",
            snapshot.workout.name,
            snapshot.workout.id,
            snapshot.workout.len()
        );

        Ok(self.snapshot.insert(snapshot))
    }

    /// Submits the session to the backend and returns to `Idle`.
    ///
    /// On any error the session stays in progress and untouched, so the
    /// caller may simply try again.
    ///
    /// # Errors
    ///
    /// - `SessionError::Busy` if another start or finish is in flight
    /// - `SessionError::NoActiveSession` when idle
    /// - `SessionError::EmptySession` if no exercise was logged
    /// - `SessionError::Submission` from the backend
    pub async fn finish(&mut self) -> Result<FinishedSession> {
        let _in_flight = InFlight::acquire(&self.in_flight)?;

        let snapshot = self.snapshot.as_ref().ok_or(SessionError::NoActiveSession)?;
        let elapsed = snapshot.elapsed_minutes(self.clock.now());
        let payload = LogPayload::from_snapshot(snapshot, elapsed)?;

        let record = match self.api.create_log(&payload).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Submission failed, session kept in progress: {e}");
                return Err(e);
            }
        };

        let mut snapshot = self.snapshot.take().ok_or(SessionError::NoActiveSession)?;
        snapshot.in_progress = false;
        self.store.clear();
        info!(
            "Finished session for workout '{}' after {} min ({} exercises logged)",
            snapshot.workout.name,
            payload.duration_minutes,
            payload.exercises.len()
        );

        Ok(FinishedSession {
            record,
            payload,
            snapshot,
        })
    }

    /// Discards the session, logged sets included, and clears the store.
    ///
    /// Irreversible; callers are expected to confirm with the user first.
    /// Abandoning while idle just clears the store and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Busy` while a start or finish is in flight.
    pub fn abandon(&mut self) -> Result<Option<SessionSnapshot>> {
        if self.is_busy() {
            return Err(SessionError::Busy);
        }

        let discarded = self.snapshot.take().map(|mut snapshot| {
            snapshot.in_progress = false;
            snapshot
        });
        self.store.clear();

        match &discarded {
            Some(snapshot) => info!(
                "Abandoned session for workout '{}' ({} exercises logged)",
                snapshot.workout.name,
                snapshot.entries.len()
            ),
            None => debug!("Abandon requested with no active session"),
        }

        Ok(discarded)
    }
}
