//! Session state enumeration.

use serde::{Deserialize, Serialize};

/// Whether a workout session is currently being tracked.
///
/// `Finished` and `Abandoned` are transitions rather than resting states:
/// both land back in `Idle`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No session is active
    #[default]
    Idle,

    /// A session is active and can be mutated
    InProgress,
}

impl SessionState {
    /// Lowercase name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::InProgress => "inprogress",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ironlog_core::models::SessionState;
    ///
    /// assert_eq!(SessionState::Idle.with_icon(), "○ Idle");
    /// assert_eq!(SessionState::InProgress.with_icon(), "➤ In Progress");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            SessionState::Idle => "○ Idle",
            SessionState::InProgress => "➤ In Progress",
        }
    }
}
