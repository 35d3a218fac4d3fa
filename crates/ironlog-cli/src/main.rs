//! Ironlog CLI Application
//!
//! Command-line front end for tracking a workout session against the
//! Ironlog backend.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use ironlog_core::ContextBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        api_url,
        api_token,
        timeout_ms,
        no_color,
        command,
    } = Args::parse();

    let context = ContextBuilder::new()
        .with_database_path(database_file)
        .with_api_url(api_url)
        .with_api_token(api_token)
        .with_timeout(Duration::from_millis(timeout_ms))
        .build()
        .await
        .context("Failed to initialize session context")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Ironlog started");

    let mut cli = Cli::new(context, renderer);
    match command {
        Some(Workout { command }) => cli.handle_workout_command(command).await,
        Some(Session { command }) => cli.handle_session_command(command).await,
        None => cli.show_status(),
    }
}
