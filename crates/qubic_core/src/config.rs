//! Session configuration supplied once by the front-end.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Who controls each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans alternating at the same interface.
    #[default]
    HotSeat,
    /// One human against the computer.
    VsComputer {
        /// The side the computer plays.
        computer: Player,
    },
}

impl GameMode {
    /// Checks if `player` is moved by the computer.
    pub fn is_computer(&self, player: Player) -> bool {
        matches!(self, GameMode::VsComputer { computer } if *computer == player)
    }
}

/// Mode and starting player for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct GameConfig {
    /// Who controls each side.
    pub mode: GameMode,
    /// The player who moves first.
    pub first_player: Player,
}

impl GameConfig {
    /// Two humans, X first.
    pub fn hot_seat() -> Self {
        Self::new(GameMode::HotSeat, Player::X)
    }

    /// Human against the computer, X first.
    pub fn vs_computer(computer: Player) -> Self {
        Self::new(GameMode::VsComputer { computer }, Player::X)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::hot_seat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_seat_has_no_computer() {
        let config = GameConfig::hot_seat();
        assert!(!config.mode.is_computer(Player::X));
        assert!(!config.mode.is_computer(Player::O));
    }

    #[test]
    fn test_vs_computer_side() {
        let config = GameConfig::vs_computer(Player::O);
        assert_eq!(config.first_player, Player::X);
        assert!(config.mode.is_computer(Player::O));
        assert!(!config.mode.is_computer(Player::X));
    }
}
