//! Command-line interface for qubic.

use crate::config::{ModeChoice, Settings, Side};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Qubic - tic-tac-toe on a 3x3 board or a 4x4x4 cube
#[derive(Parser, Debug)]
#[command(name = "qubic")]
#[command(about = "Tic-tac-toe on a 3x3 board or a 4x4x4 cube", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true, env = "QUBIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Board to play on
    #[command(subcommand)]
    pub command: Command,
}

/// Available boards
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play on the classic 3x3 board
    Classic(PlayArgs),

    /// Play on the 4x4x4 cube
    Cube(PlayArgs),
}

impl Command {
    /// Greeting shown before the menus.
    pub fn title(&self) -> &'static str {
        match self {
            Command::Classic(_) => "Welcome to Tic-Tac-Toe!",
            Command::Cube(_) => "Welcome to 3D Tic-Tac-Toe!",
        }
    }

    /// Flags shared by every board.
    pub fn args(&self) -> &PlayArgs {
        match self {
            Command::Classic(args) | Command::Cube(args) => args,
        }
    }
}

/// Session flags; each overrides the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Hot-seat or against the computer (asked if omitted)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeChoice>,

    /// Side that moves first
    #[arg(short, long, value_enum)]
    pub first: Option<Side>,

    /// Side the computer plays
    #[arg(long, value_enum)]
    pub computer: Option<Side>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayArgs {
    /// Settings expressed by these flags.
    pub fn settings(&self) -> Settings {
        Settings::new(self.mode, self.first, self.computer, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cube_flags() {
        let cli = Cli::try_parse_from([
            "qubic", "cube", "--mode", "computer", "--computer", "x", "--seed", "5",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Cube(_)));
        let settings = cli.command.args().settings();
        assert_eq!(*settings.mode(), Some(ModeChoice::Computer));
        assert_eq!(*settings.computer(), Some(Side::X));
        assert_eq!(*settings.seed(), Some(5));
        assert_eq!(*settings.first_player(), None);
    }

    #[test]
    fn test_parse_classic_hot_seat() {
        let cli = Cli::try_parse_from(["qubic", "classic", "--mode", "hot-seat", "-f", "o"]).unwrap();
        assert_eq!(cli.command.title(), "Welcome to Tic-Tac-Toe!");
        assert_eq!(cli.command.args().first, Some(Side::O));
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["qubic", "cube", "--config", "game.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["qubic"]).is_err());
    }
}
