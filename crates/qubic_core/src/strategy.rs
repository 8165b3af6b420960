//! Computer move selection.
//!
//! The classic board plays the first open cell; the cube picks an open
//! cell at random. Neither looks ahead.

use crate::board_game::BoardGame;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Returns the first empty cell in row-major order.
#[instrument(skip(board))]
pub fn first_empty<B: BoardGame>(board: &B) -> Option<B::Coords> {
    let choice = board
        .cells()
        .find(|(_, cell)| cell.is_empty())
        .map(|(coords, _)| coords);
    debug!(?choice, "First empty cell");
    choice
}

/// Returns an empty cell chosen uniformly at random.
#[instrument(skip(board, rng))]
pub fn uniform_random<B: BoardGame, R: Rng + ?Sized>(board: &B, rng: &mut R) -> Option<B::Coords> {
    let empty = board.empty_cells();
    let choice = empty.choose(rng).copied();
    debug!(?choice, candidates = empty.len(), "Random empty cell");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord2, Coord3, CubeBoard, PlanarBoard, Player};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_first_empty_skips_occupied() {
        let mut board = PlanarBoard::new();
        board.apply_move(Coord2::new(0, 0), Player::X).unwrap();
        board.apply_move(Coord2::new(0, 1), Player::O).unwrap();
        assert_eq!(first_empty(&board), Some(Coord2::new(0, 2)));
    }

    #[test]
    fn test_first_empty_full_board() {
        let mut board = PlanarBoard::new();
        let mut player = Player::X;
        for coords in PlanarBoard::new().empty_cells() {
            board.apply_move(coords, player).unwrap();
            player = player.opponent();
        }
        assert_eq!(first_empty(&board), None);
    }

    #[test]
    fn test_uniform_random_picks_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = CubeBoard::new();
        board.apply_move(Coord3::new(0, 0, 0), Player::X).unwrap();
        for _ in 0..200 {
            let choice = uniform_random(&board, &mut rng).unwrap();
            assert_ne!(choice, Coord3::new(0, 0, 0));
            assert!(board.get(choice).unwrap().is_empty());
        }
    }

    #[test]
    fn test_uniform_random_reaches_many_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = CubeBoard::new();
        let picks: std::collections::HashSet<_> = (0..500)
            .filter_map(|_| uniform_random(&board, &mut rng))
            .collect();
        assert!(picks.len() > 32);
    }
}
