//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::board_game::BoardGame;
use crate::game::GameState;

/// Invariant: history length equals the number of marks on the board.
pub struct HistoryConsistentInvariant;

impl<B: BoardGame> Invariant<GameState<B>> for HistoryConsistentInvariant {
    fn holds(game: &GameState<B>) -> bool {
        let (x, o) = game.board().mark_counts();
        game.history().len() == x + o
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
