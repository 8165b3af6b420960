//! Moves and the ways a move can be rejected.

use super::Player;
use serde::{Deserialize, Serialize};

/// A player placing their mark at some coordinates.
///
/// Accepted moves are recorded in the game history and can be
/// replayed onto an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move<C> {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub coords: C,
}

impl<C: std::fmt::Display> std::fmt::Display for Move<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coords)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the board and turn are left untouched
/// and the caller may simply ask for another move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate component lies outside the grid.
    #[display("Coordinates are outside the board")]
    OutOfBounds,

    /// The target cell already holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A human move was submitted while the computer is to move.
    #[display("{} is played by the computer", _0)]
    ComputerControlled(Player),

    /// A computer move was requested while a human is to move.
    #[display("{} is played by a human", _0)]
    HumanControlled(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
