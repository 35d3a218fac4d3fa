//! Display formatting for workouts, sessions and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders in the terminal. Wrapper types in
//! [`results`] and [`status`] format the outcome of a transition.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result Wrappers │    │   Formatted     │
//! │ (Workout,       │───▶│ & Status Lines  │───▶│    Output       │
//! │  Snapshot)      │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//! - [`results`]: Finish and abandon results
//! - [`status`]: Single-line confirmations (OperationStatus)
//!
//! ## Usage Examples
//!
//! ```rust
//! use ironlog_core::{
//!     display::AbandonResult,
//!     models::{ExercisePlan, SessionSnapshot, WorkoutDefinition},
//! };
//! use jiff::Timestamp;
//!
//! let workout = WorkoutDefinition {
//!     id: "w1".to_string(),
//!     name: "Legs".to_string(),
//!     exercises: vec![ExercisePlan::new("squat", 5, 5, 180)],
//! };
//! let snapshot = SessionSnapshot::new(workout, Timestamp::now());
//! assert!(format!("{snapshot}").starts_with("# Legs"));
//!
//! let output = format!("{}", AbandonResult(Some(snapshot)));
//! assert!(output.contains("Abandoned session for 'Legs'"));
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use datetime::LocalDateTime;
pub use results::AbandonResult;
pub use status::OperationStatus;
