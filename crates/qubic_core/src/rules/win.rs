//! Win detection logic.

use crate::board_game::BoardGame;
use crate::types::{Cell, Player};
use tracing::{debug, instrument};

/// Checks if there is a winner on the board.
///
/// Scans the geometry's lines in table order and returns the owner of the
/// first line whose cells all hold the same mark.
#[instrument(skip(board))]
pub fn find_winner<B: BoardGame>(board: &B) -> Option<Player> {
    B::lines().iter().find_map(|line| {
        let owner = line_owner(board, line.as_ref())?;
        debug!(%owner, line = ?line.as_ref(), "Winning line found");
        Some(owner)
    })
}

/// Returns the player holding every cell of `line`, if any.
///
/// Empty lines, lines touching an empty cell and lines with
/// out-of-range coordinates have no owner.
pub fn line_owner<B: BoardGame>(board: &B, line: &[B::Coords]) -> Option<Player> {
    let (first, rest) = line.split_first()?;
    let owner = board.get(*first).ok()?.player()?;
    rest.iter()
        .all(|coords| board.get(*coords) == Ok(Cell::from(owner)))
        .then_some(owner)
}
