//! Qubic - console tic-tac-toe on a 3x3 board or a 4x4x4 cube.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use qubic::{Cli, Command, Console, Settings};
use qubic_core::{BoardGame, CubeBoard, PlanarBoard};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(&cli)?;

    match &cli.command {
        Command::Classic(_) => play::<PlanarBoard>(cli.command.title(), &settings),
        Command::Cube(_) => play::<CubeBoard>(cli.command.title(), &settings),
    }
}

/// Settings file (if any) with command-line flags layered on top.
#[instrument(skip(cli))]
fn load_settings(cli: &Cli) -> Result<Settings> {
    let file = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let settings = file.overridden_by(cli.command.args().settings());
    info!(?settings, "Effective settings");
    Ok(settings)
}

/// Plays one game on stdin/stdout.
fn play<B: BoardGame>(title: &str, settings: &Settings) -> Result<()> {
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let outcome = console.run::<B>(title, settings)?;
    info!(%outcome, "Game over");
    Ok(())
}
