//! Draw detection logic.

use super::win::find_winner;
use crate::board_game::BoardGame;
use tracing::instrument;

/// Checks if the board is full (every cell occupied).
#[instrument(skip(board))]
pub fn is_full<B: BoardGame>(board: &B) -> bool {
    board.cells().all(|(_, cell)| !cell.is_empty())
}

/// Checks if the board is full with no winner.
///
/// A completed line on the last move is a win, not a draw.
#[instrument(skip(board))]
pub fn is_draw<B: BoardGame>(board: &B) -> bool {
    is_full(board) && find_winner(board).is_none()
}
