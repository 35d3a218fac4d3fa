//! Core library for the Ironlog workout tracker.
//!
//! This crate tracks one in-progress training session on the client side: it
//! seeds the session from a backend workout, records sets as they are
//! performed, keeps a durable copy of the session after every change so it
//! survives a restart, and finally submits the session as a workout log.
//!
//! # Architecture
//!
//! - [`session`]: the [`WorkoutContext`] state machine
//! - [`store`]: durable single-slot persistence of the session snapshot
//! - [`api`]: workout retrieval and log submission against the backend
//! - [`models`]: workouts, logged sets, snapshots and wire payloads
//! - [`display`]: markdown formatting for terminal output
//! - [`error`]: the [`SessionError`] taxonomy
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ironlog_core::{ContextBuilder, SetInput};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut context = ContextBuilder::new()
//!     .with_database_path(Some("ironlog.db"))
//!     .with_api_url("http://localhost:3000/api")
//!     .build()
//!     .await?;
//!
//! if context.snapshot().is_none() {
//!     context.start("65f1c0ffee").await?;
//! }
//! context.log_current(&vec![SetInput::new(80.0, 5); 3])?;
//! context.set_notes("Felt heavy today")?;
//!
//! match context.finish().await {
//!     Ok(finished) => println!("{finished}"),
//!     Err(e) => eprintln!("{e} (session kept, try again)"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod display;
pub mod error;
pub mod models;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use api::{HttpWorkoutApi, WorkoutApi};
pub use display::{AbandonResult, LocalDateTime, OperationStatus};
pub use error::{ErrorKind, Result, SessionError};
pub use models::{
    ExerciseLogEntry, ExercisePlan, LogPayload, LogRecord, SessionSnapshot, SessionState,
    SetInput, SetResult, WorkoutDefinition,
};
pub use session::{Clock, ContextBuilder, FinishedSession, SystemClock, WorkoutContext};
pub use store::{KeyValueStore, MemoryKeyValueStore, SessionStore, SqliteKeyValueStore};
