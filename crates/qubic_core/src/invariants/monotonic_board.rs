//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::board_game::BoardGame;
use crate::game::GameState;

/// Invariant: replaying the history onto an empty board reproduces the board.
///
/// Every move must have landed on an empty cell, and no cell may hold a
/// mark that the history does not account for.
pub struct MonotonicBoardInvariant;

impl<B: BoardGame> Invariant<GameState<B>> for MonotonicBoardInvariant {
    fn holds(game: &GameState<B>) -> bool {
        let mut reconstructed = B::default();
        for mov in game.history() {
            if reconstructed.apply_move(mov.coords, mov.player).is_err() {
                return false;
            }
        }
        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord2, Move, PlanarBoard, Player};

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::<PlanarBoard>::new(Player::X);
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_played_game_holds() {
        let moves = [Coord2::new(0, 0), Coord2::new(2, 2), Coord2::new(1, 1)];
        let game = GameState::<PlanarBoard>::replay(Player::X, &moves).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = GameState::<PlanarBoard>::new(Player::X);
        game.attempt_move(Coord2::new(0, 0)).unwrap();
        game.history.push(Move::new(Player::O, Coord2::new(0, 0)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut game = GameState::<PlanarBoard>::new(Player::X);
        game.attempt_move(Coord2::new(0, 0)).unwrap();
        game.board.set(Coord2::new(2, 0), Cell::O).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
