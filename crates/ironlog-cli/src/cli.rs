//! Command definitions and handlers.
//!
//! Each command is a clap argument struct converted into the core's types,
//! keeping clap out of `ironlog-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Types → WorkoutContext
//! ```
//!
//! [`Cli`] owns the [`WorkoutContext`] for the duration of one invocation and
//! renders every outcome as markdown through the [`TerminalRenderer`].

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use ironlog_core::{
    AbandonResult, HttpWorkoutApi, OperationStatus, SetInput, SqliteKeyValueStore,
    WorkoutApi, WorkoutContext,
};
use log::debug;
use serde_json::Value;

use crate::renderer::TerminalRenderer;

type LocalContext = WorkoutContext<HttpWorkoutApi, SqliteKeyValueStore>;

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Show a workout definition from the backend
    #[command(alias = "s")]
    Show(ShowWorkoutArgs),
}

/// Show a workout
#[derive(Args)]
pub struct ShowWorkoutArgs {
    /// Backend identifier of the workout
    pub id: String,
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Start a session from a workout
    Start(StartSessionArgs),
    /// Show the session in progress
    #[command(aliases = ["st", "show"])]
    Status,
    /// Move to the next exercise
    #[command(alias = "n")]
    Next,
    /// Move to the previous exercise
    #[command(alias = "p")]
    Prev,
    /// Move to an exercise by position
    #[command(alias = "j")]
    Jump(JumpArgs),
    /// Log the sets performed for an exercise
    #[command(alias = "l")]
    Log(LogSetsArgs),
    /// Replace the session notes
    Notes(NotesArgs),
    /// Submit the session as a workout log
    #[command(alias = "f")]
    Finish,
    /// Discard the session without submitting it
    Abandon(AbandonArgs),
}

/// Start a session
#[derive(Args)]
pub struct StartSessionArgs {
    /// Backend identifier of the workout to perform
    pub workout_id: String,
}

/// Jump to an exercise
#[derive(Args)]
pub struct JumpArgs {
    /// 1-based position of the exercise in the workout
    #[arg(allow_negative_numbers = true)]
    pub position: i64,
}

impl JumpArgs {
    /// The 0-based index the core works with.
    pub fn index(&self) -> i64 {
        self.position.saturating_sub(1)
    }
}

/// Log sets
///
/// Sets are given as `<weight>x<reps>`, e.g. `--set 60x10 --set 62.5x8`.
/// Values that are not numbers are recorded as 0.
#[derive(Args)]
pub struct LogSetsArgs {
    /// Exercise to log; defaults to the current exercise
    #[arg(short, long)]
    pub exercise: Option<String>,

    /// One performed set as <weight>x<reps>
    #[arg(short, long = "set", value_name = "WEIGHTxREPS", required = true)]
    pub sets: Vec<String>,
}

impl LogSetsArgs {
    /// Raw sets for the core's lenient coercion.
    pub fn set_inputs(&self) -> Vec<SetInput> {
        self.sets.iter().map(|s| parse_set(s)).collect()
    }
}

/// Splits `<weight>x<reps>` without judging either side.
fn parse_set(raw: &str) -> SetInput {
    match raw.split_once(['x', 'X', '×']) {
        Some((weight, reps)) => SetInput::raw(weight.trim(), reps.trim()),
        None => SetInput::raw(raw.trim(), Value::Null),
    }
}

/// Replace notes
#[derive(Args)]
pub struct NotesArgs {
    /// New notes; replaces any previous notes
    pub text: String,
}

/// Abandon the session
#[derive(Args)]
pub struct AbandonArgs {
    /// Confirm discarding the session (required)
    #[arg(long, short)]
    pub yes: bool,
}

/// Handler for one CLI invocation.
pub struct Cli {
    context: LocalContext,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(context: LocalContext, renderer: TerminalRenderer) -> Self {
        Self { context, renderer }
    }

    pub async fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Show(args) => {
                let workout = self
                    .context
                    .api()
                    .fetch_workout(&args.id)
                    .await
                    .with_context(|| format!("Failed to fetch workout {}", args.id))?;
                self.renderer.render(&workout)
            }
        }
    }

    pub async fn handle_session_command(&mut self, command: SessionCommands) -> Result<()> {
        debug!("Session state before command: {}", self.context.state());
        match command {
            SessionCommands::Start(args) => {
                let snapshot = self
                    .context
                    .start(&args.workout_id)
                    .await
                    .context("Failed to start workout session")?;
                self.renderer.render(snapshot)
            }
            SessionCommands::Status => self.show_status(),
            SessionCommands::Next => {
                let moved = self.context.advance()?;
                self.render_move(moved, "Already at the last exercise")
            }
            SessionCommands::Prev => {
                let moved = self.context.retreat()?;
                self.render_move(moved, "Already at the first exercise")
            }
            SessionCommands::Jump(args) => {
                self.context
                    .jump_to(args.index())
                    .context("Failed to change exercise")?;
                self.render_move(true, "")
            }
            SessionCommands::Log(args) => {
                let sets = args.set_inputs();
                let entry = match &args.exercise {
                    Some(exercise) => self.context.log_set(exercise, &sets)?,
                    None => self.context.log_current(&sets)?,
                };
                let status =
                    OperationStatus::applied(format!("Logged {}: {entry}", entry.exercise_ref));
                self.renderer.render(&status)
            }
            SessionCommands::Notes(args) => {
                self.context.set_notes(args.text)?;
                self.renderer.render(&OperationStatus::applied("Notes updated"))
            }
            SessionCommands::Finish => {
                let finished = self
                    .context
                    .finish()
                    .await
                    .context("Failed to finish workout session; it is kept in progress")?;
                self.renderer.render(&finished)
            }
            SessionCommands::Abandon(args) => {
                if !args.yes {
                    let logged = self.context.snapshot().map_or(0, |s| s.entries.len());
                    bail!(
                        "Abandoning discards the session and its {logged} logged exercises. \
                         Re-run with --yes to confirm."
                    );
                }
                let discarded = self.context.abandon()?;
                self.renderer.render(&AbandonResult(discarded))
            }
        }
    }

    pub fn show_status(&self) -> Result<()> {
        match self.context.snapshot() {
            Some(snapshot) => {
                self.renderer.render(snapshot)?;
                if let Some(minutes) = self.context.elapsed_minutes() {
                    self.renderer.render(&format!("\nElapsed: {minutes} min\n"))?;
                }
                Ok(())
            }
            None => self.renderer.render("No active session.\n"),
        }
    }

    fn render_move(&self, moved: bool, boundary_message: &str) -> Result<()> {
        let status = match (moved, self.context.snapshot()) {
            (true, Some(snapshot)) => {
                let exercise = snapshot
                    .current_exercise()
                    .map_or("", |e| e.exercise_ref.as_str());
                OperationStatus::applied(format!(
                    "Moved to exercise {}/{}: {exercise}",
                    snapshot.current_index + 1,
                    snapshot.workout.len()
                ))
            }
            _ => OperationStatus::noop(boundary_message),
        };
        self.renderer.render(&status)
    }
}
