//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions gate every move; postconditions re-check
//! the game invariants after a move in debug builds.

use crate::action::{Move, MoveError};
use crate::board_game::BoardGame;
use crate::game::GameState;
use crate::invariants::{GameInvariants, InvariantSet};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not finished.
pub struct GameOngoing;

impl GameOngoing {
    /// Rejects moves on a finished game.
    pub fn check<B: BoardGame>(game: &GameState<B>) -> Result<(), MoveError> {
        if game.turn_state().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    pub fn check<B: BoardGame>(mov: &Move<B::Coords>, game: &GameState<B>) -> Result<(), MoveError> {
        if mov.player != game.current_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellAvailable;

impl CellAvailable {
    /// Rejects out-of-range coordinates and occupied cells.
    pub fn check<B: BoardGame>(mov: &Move<B::Coords>, game: &GameState<B>) -> Result<(), MoveError> {
        if game.board().get(mov.coords)?.is_empty() {
            Ok(())
        } else {
            Err(MoveError::CellOccupied)
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check<B: BoardGame>(mov: &Move<B::Coords>, game: &GameState<B>) -> Result<(), MoveError> {
        GameOngoing::check(game)?;
        PlayersTurn::check(mov, game)?;
        CellAvailable::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game not over
/// - Mover's turn
/// - Cell in bounds and empty
///
/// Postconditions:
/// - Exactly one mark was added
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl<B: BoardGame> Contract<GameState<B>, Move<B::Coords>> for MoveContract {
    fn pre(game: &GameState<B>, action: &Move<B::Coords>) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState<B>, after: &GameState<B>) -> Result<(), MoveError> {
        let (bx, bo) = before.board().mark_counts();
        let (ax, ao) = after.board().mark_counts();
        if ax + ao != bx + bo + 1 {
            warn!(before = bx + bo, after = ax + ao, "Mark count did not grow by one");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one mark must be added".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
