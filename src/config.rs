//! Session settings loaded from TOML and command-line flags.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use qubic_core::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who controls the sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModeChoice {
    /// Two people at the same terminal.
    HotSeat,
    /// One person against the computer.
    Computer,
}

/// A side as written in settings and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Side {
    /// Player X.
    #[serde(alias = "x")]
    X,
    /// Player O.
    #[serde(alias = "o")]
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

/// Session settings. Anything left unset is asked for interactively.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new,
)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Hot-seat or versus the computer.
    mode: Option<ModeChoice>,

    /// Side that moves first.
    first_player: Option<Side>,

    /// Side the computer plays in computer mode.
    computer: Option<Side>,

    /// Seed for the computer's random choices.
    seed: Option<u64>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Layers `overrides` on top of these settings; set fields win.
    pub fn overridden_by(self, overrides: Settings) -> Settings {
        Settings {
            mode: overrides.mode.or(self.mode),
            first_player: overrides.first_player.or(self.first_player),
            computer: overrides.computer.or(self.computer),
            seed: overrides.seed.or(self.seed),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
