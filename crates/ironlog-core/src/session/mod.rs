//! Workout session state machine.
//!
//! [`WorkoutContext`] owns the single active [`SessionSnapshot`] and exposes
//! every transition a UI needs: starting a session from a backend workout,
//! moving between exercises, logging sets, editing notes, and finally
//! submitting or abandoning the session.
//!
//! # States
//!
//! ```text
//!            start()                 finish() ok
//!   ┌──────┐ ───────▶ ┌────────────┐ ───────────▶ ┌──────┐
//!   │ Idle │          │ InProgress │              │ Idle │
//!   └──────┘ ◀─────── └────────────┘ ───────────▶ └──────┘
//!            abandon()   │      ▲      (store cleared)
//!                        └──────┘
//!            advance / retreat / jump_to / log_set / set_notes
//! ```
//!
//! Every mutation rewrites the full snapshot to the [`SessionStore`]; on
//! construction the context loads it back exactly once, so a session
//! survives a restart of the process that owns it.
//!
//! ## Submodules
//!
//! - [`builder`]: Wiring of the production context (HTTP + SQLite)
//! - [`clock`]: Time source used for start stamps and elapsed minutes
//! - [`lifecycle`]: Restore, start, finish and abandon
//! - [`navigation`]: Moving the current-exercise cursor
//! - [`entries`]: Logging sets and editing notes
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use ironlog_core::{ContextBuilder, SetInput};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut context = ContextBuilder::new()
//!     .with_api_url("http://localhost:3000/api")
//!     .build()
//!     .await?;
//!
//! context.start("65f1c0ffee").await?;
//! context.log_current(&[SetInput::new(60.0, 10), SetInput::raw("62.5", "8")])?;
//! context.advance()?;
//! let finished = context.finish().await?;
//! println!("{finished}");
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    api::WorkoutApi,
    error::{Result, SessionError},
    models::{ExercisePlan, SessionSnapshot, SessionState},
    store::{KeyValueStore, SessionStore},
};

pub mod builder;
pub mod clock;
pub mod entries;
pub mod lifecycle;
pub mod navigation;

mod guard;


pub use builder::{ContextBuilder, DEFAULT_API_URL};
pub use clock::{Clock, SystemClock};
pub use lifecycle::FinishedSession;

/// Owner of the active workout session.
pub struct WorkoutContext<A, K> {
    api: A,
    store: SessionStore<K>,
    clock: Arc<dyn Clock>,
    snapshot: Option<SessionSnapshot>,
    in_flight: Arc<AtomicBool>,
}

impl<A: WorkoutApi, K: KeyValueStore> WorkoutContext<A, K> {
    /// Creates a context and resumes any in-progress session found in
    /// `backend`.
    pub fn new(api: A, backend: K) -> Self {
        let mut context = Self {
            api,
            store: SessionStore::new(backend),
            clock: Arc::new(SystemClock),
            snapshot: None,
            in_flight: Arc::new(AtomicBool::new(false)),
        };
        context.restore();
        context
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Current state of the machine.
    pub fn state(&self) -> SessionState {
        if self.snapshot.is_some() {
            SessionState::InProgress
        } else {
            SessionState::Idle
        }
    }

    /// The active snapshot, if any.
    pub fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    /// The planned exercise under the cursor.
    pub fn current_exercise(&self) -> Option<&ExercisePlan> {
        self.snapshot.as_ref()?.current_exercise()
    }

    /// Minutes elapsed since the active session started.
    pub fn elapsed_minutes(&self) -> Option<i64> {
        let now = self.clock.now();
        self.snapshot.as_ref().map(|s| s.elapsed_minutes(now))
    }

    /// Whether a `start` or `finish` call is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// The backend adapter.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The session store.
    pub fn store(&self) -> &SessionStore<K> {
        &self.store
    }

    fn active_mut(&mut self) -> Result<&mut SessionSnapshot> {
        self.snapshot.as_mut().ok_or(SessionError::NoActiveSession)
    }

    fn persist(&self) {
        if let Some(snapshot) = &self.snapshot {
            self.store.save(snapshot);
        }
    }
}
