//! Result types for displaying the end of a session.

use std::fmt;

use crate::{models::SessionSnapshot, session::FinishedSession};

impl fmt::Display for FinishedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Finished workout '{}' in {} min",
            self.snapshot.workout.name, self.payload.duration_minutes
        )?;
        writeln!(f)?;
        if let Some(id) = &self.record.id {
            writeln!(f, "- Log ID: {id}")?;
        }
        writeln!(f, "- Exercises logged: {}", self.payload.exercises.len())?;
        let sets: usize = self.payload.exercises.iter().map(|e| e.sets.len()).sum();
        writeln!(f, "- Sets: {sets}")?;
        let volume: f64 = self.snapshot.entries.iter().map(|e| e.volume()).sum();
        writeln!(f, "- Volume: {volume}")?;

        writeln!(f)?;
        for entry in &self.snapshot.entries {
            writeln!(f, "- **{}**: {entry}", entry.exercise_ref)?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of an abandon.
///
/// Holds the discarded snapshot, or `None` if nothing was active.
pub struct AbandonResult(pub Option<SessionSnapshot>);

impl fmt::Display for AbandonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(snapshot) => writeln!(
                f,
                "Abandoned session for '{}' ({} logged exercises discarded)",
                snapshot.workout.name,
                snapshot.entries.len()
            ),
            None => writeln!(f, "No active session to abandon."),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{ExercisePlan, LogPayload, LogRecord, SetInput, WorkoutDefinition};

    #[test]
    fn test_finished_session_display() {
        let workout = WorkoutDefinition {
            id: "w1".to_string(),
            name: "Legs".to_string(),
            exercises: vec![ExercisePlan::new("squat", 3, 5, 180)],
        };
        let mut snapshot = SessionSnapshot::new(workout, Timestamp::from_second(0).unwrap());
        snapshot.upsert_entry("squat", &[SetInput::new(100.0, 5), SetInput::new(100.0, 5)]);
        let payload = LogPayload::from_snapshot(&snapshot, 37).unwrap();
        let finished = FinishedSession {
            record: LogRecord {
                id: Some("log-3".to_string()),
                ..LogRecord::default()
            },
            payload,
            snapshot,
        };

        let output = format!("{finished}");
        assert!(output.contains("Finished workout 'Legs' in 37 min"));
        assert!(output.contains("- Log ID: log-3"));
        assert!(output.contains("- Sets: 2"));
        assert!(output.contains("- Volume: 1000"));
        assert!(output.contains("- **squat**: 100 × 5, 100 × 5"));
    }

    #[test]
    fn test_abandon_result_without_session() {
        assert_eq!(
            format!("{}", AbandonResult(None)),
            "No active session to abandon.\n"
        );
    }
}
