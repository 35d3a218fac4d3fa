//! Data models for workout definitions, logged sets and session snapshots.
//!
//! This module contains the core domain models of a workout session. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures apart from presentation.
//!
//! # Model Overview
//!
//! - [`WorkoutDefinition`] / [`ExercisePlan`]: the template a session is
//!   seeded from, as returned by the backend
//! - [`SetInput`]: a set as typed by the user, before coercion
//! - [`SetResult`] / [`ExerciseLogEntry`]: what was actually performed
//! - [`SessionSnapshot`]: the complete persisted state of a session
//! - [`LogPayload`]: the backend's log-creation request body
//!
//! # Examples
//!
//! ```rust
//! use ironlog_core::models::{ExercisePlan, SessionSnapshot, SetInput, WorkoutDefinition};
//! use jiff::Timestamp;
//!
//! let workout = WorkoutDefinition {
//!     id: "w1".to_string(),
//!     name: "Push day".to_string(),
//!     exercises: vec![ExercisePlan::new("bench", 3, 10, 90)],
//! };
//! let mut snapshot = SessionSnapshot::new(workout, Timestamp::now());
//! snapshot.upsert_entry("bench", &[SetInput::raw("60", 10)]);
//! assert_eq!(snapshot.entries[0].sets[0].weight, 60.0);
//! ```

pub mod definition;
pub mod entry;
pub mod payload;
pub mod snapshot;
pub mod status;


pub use definition::{ExercisePlan, WorkoutDefinition};
pub use entry::{ExerciseLogEntry, SetInput, SetResult};
pub use payload::{LogExercise, LogPayload, LogRecord, LogSet};
pub use snapshot::SessionSnapshot;
pub use status::SessionState;
