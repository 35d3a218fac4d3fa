//! One-line confirmations for session transitions.

use std::fmt;

/// Outcome line for a transition that either took effect or was a no-op.
///
/// Navigation at a boundary is not an error, so it is reported as a
/// `noop` rather than a failure.
pub struct OperationStatus {
    pub message: String,
    pub applied: bool,
}

impl OperationStatus {
    /// The transition took effect.
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: true,
        }
    }

    /// Nothing changed.
    pub fn noop(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.applied { "✓" } else { "○" };
        writeln!(f, "{icon} {}", self.message)
    }
}
