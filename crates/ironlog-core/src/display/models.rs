//! Display implementations for domain models.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Status icons for exercises (➤ current, ✓ logged, ○ pending)
//! - Targets and logged sets side by side

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    ExerciseLogEntry, ExercisePlan, SessionSnapshot, SessionState, SetResult, WorkoutDefinition,
};

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.weight, self.reps)
    }
}

impl fmt::Display for ExerciseLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sets.is_empty() {
            return write!(f, "no sets");
        }
        for (i, set) in self.sets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{set}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ExercisePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {}, rest {}s",
            self.target_sets, self.target_reps, self.target_rest_seconds
        )
    }
}

impl fmt::Display for WorkoutDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Exercises: {}", self.len())?;

        if self.is_empty() {
            writeln!(f, "\nNo exercises in this workout.")?;
            return Ok(());
        }

        writeln!(f, "\n## Exercises")?;
        writeln!(f)?;
        for (i, exercise) in self.exercises.iter().enumerate() {
            writeln!(f, "{}. **{}**: {exercise}", i + 1, exercise.exercise_ref)?;
            if let Some(notes) = &exercise.notes {
                writeln!(f, "   {notes}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.in_progress {
            SessionState::InProgress
        } else {
            SessionState::Idle
        };
        writeln!(f, "# {} ({})", self.workout.name, state.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- Workout: {}", self.workout.id)?;
        writeln!(f, "- Started: {}", LocalDateTime(&self.started_at))?;
        if let Some(current) = self.current_exercise() {
            writeln!(
                f,
                "- Current exercise: {}/{} {}",
                self.current_index + 1,
                self.workout.len(),
                current.exercise_ref
            )?;
        }
        writeln!(
            f,
            "- Logged: {}/{} exercises",
            self.entries.len(),
            self.workout.len()
        )?;

        writeln!(f, "\n## Exercises")?;
        for (i, exercise) in self.workout.exercises.iter().enumerate() {
            let entry = self.entry(&exercise.exercise_ref);
            let icon = if i == self.current_index {
                "➤"
            } else if entry.is_some() {
                "✓"
            } else {
                "○"
            };
            writeln!(f)?;
            writeln!(f, "### {}. {} {icon}", i + 1, exercise.exercise_ref)?;
            writeln!(f)?;
            writeln!(f, "- Target: {exercise}")?;
            if let Some(entry) = entry {
                writeln!(f, "- Logged: {entry}")?;
            }
            if let Some(notes) = &exercise.notes {
                writeln!(f, "- Notes: {notes}")?;
            }
        }

        // Entries for exercises outside the plan
        let extra: Vec<_> = self
            .entries
            .iter()
            .filter(|e| {
                !self
                    .workout
                    .exercises
                    .iter()
                    .any(|p| p.exercise_ref == e.exercise_ref)
            })
            .collect();
        if !extra.is_empty() {
            writeln!(f, "\n## Additional exercises")?;
            writeln!(f)?;
            for entry in extra {
                writeln!(f, "- **{}**: {entry}", entry.exercise_ref)?;
            }
        }

        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        Ok(())
    }
}
