//! Game state and move application.

use crate::action::{Move, MoveError};
use crate::board_game::BoardGame;
use crate::contracts::{Contract, MoveContract};
use crate::types::{Player, TurnState};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game: board, turn and history.
///
/// A rejected move leaves every field untouched, so the same player is
/// asked again. Once the state is terminal every move is rejected with
/// [`MoveError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "B: Serialize, B::Coords: Serialize",
    deserialize = "B: Deserialize<'de>, B::Coords: Deserialize<'de>"
))]
pub struct GameState<B: BoardGame> {
    pub(crate) board: B,
    pub(crate) current: Player,
    first_player: Player,
    state: TurnState,
    pub(crate) history: Vec<Move<B::Coords>>,
}

impl<B: BoardGame> GameState<B> {
    /// Creates a game on an empty board with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: B::default(),
            current: first_player,
            first_player,
            state: TurnState::AwaitingMove(first_player),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Returns the player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the turn state.
    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move<B::Coords>] {
        &self.history
    }

    /// Returns the cells the current player may choose.
    pub fn valid_moves(&self) -> Vec<B::Coords> {
        if self.state.is_terminal() {
            Vec::new()
        } else {
            self.board.empty_cells()
        }
    }

    /// Places the current player's mark at `coords`.
    ///
    /// Returns the new turn state, or the reason the move was rejected.
    /// The caller decides whether to ask again.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn attempt_move(&mut self, coords: B::Coords) -> Result<TurnState, MoveError> {
        self.make_move(Move::new(self.current, coords))
    }

    /// Applies a move made by a named player.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self))]
    pub fn make_move(&mut self, action: Move<B::Coords>) -> Result<TurnState, MoveError> {
        MoveContract::pre(&*self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.apply_move(action.coords, action.player)?;
        self.history.push(action);

        self.state = if let Some(winner) = self.board.find_winner() {
            TurnState::Won(winner)
        } else if self.board.is_full() {
            TurnState::Draw
        } else {
            self.current = self.current.opponent();
            TurnState::AwaitingMove(self.current)
        };
        debug!(%action, state = ?self.state, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &*self)?;

        Ok(self.state)
    }

    /// Rebuilds a game by playing `moves` in order from an empty board.
    ///
    /// Moves after the game ends are rejected with [`MoveError::GameOver`].
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_player: Player, moves: &[B::Coords]) -> Result<Self, MoveError> {
        let mut game = Self::new(first_player);
        for coords in moves {
            game.attempt_move(*coords)?;
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord2, Coord3, CubeBoard, PlanarBoard};

    #[test]
    fn test_new_game_awaits_first_player() {
        let game = GameState::<PlanarBoard>::new(Player::O);
        assert_eq!(game.turn_state(), TurnState::AwaitingMove(Player::O));
        assert_eq!(game.current_player(), Player::O);
        assert!(game.history().is_empty());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_accepted_move_switches_player() {
        let mut game = GameState::<PlanarBoard>::new(Player::X);
        let state = game.attempt_move(Coord2::new(1, 1)).unwrap();
        assert_eq!(state, TurnState::AwaitingMove(Player::O));
        assert_eq!(game.board().get(Coord2::new(1, 1)), Ok(Cell::X));
        assert_eq!(game.history(), &[Move::new(Player::X, Coord2::new(1, 1))]);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = GameState::<PlanarBoard>::new(Player::X);
        game.attempt_move(Coord2::new(0, 0)).unwrap();
        game.attempt_move(Coord2::new(1, 1)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.attempt_move(Coord2::new(1, 1)),
            Err(MoveError::CellOccupied)
        );
        assert_eq!(
            game.attempt_move(Coord2::new(0, 9)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(game, before);
        assert_eq!(game.turn_state(), TurnState::AwaitingMove(Player::X));
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = GameState::<PlanarBoard>::new(Player::X);
        assert_eq!(
            game.make_move(Move::new(Player::O, Coord2::new(0, 0))),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_no_moves_after_win() {
        let moves = [
            Coord2::new(0, 0),
            Coord2::new(1, 0),
            Coord2::new(0, 1),
            Coord2::new(1, 1),
            Coord2::new(0, 2),
        ];
        let mut game = GameState::<PlanarBoard>::replay(Player::X, &moves).unwrap();
        assert_eq!(game.turn_state(), TurnState::Won(Player::X));
        assert!(game.valid_moves().is_empty());
        assert_eq!(
            game.attempt_move(Coord2::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_replay_rejects_moves_past_the_end() {
        let moves = [
            Coord2::new(0, 0),
            Coord2::new(1, 0),
            Coord2::new(0, 1),
            Coord2::new(1, 1),
            Coord2::new(0, 2),
            Coord2::new(2, 2),
        ];
        assert_eq!(
            GameState::<PlanarBoard>::replay(Player::X, &moves).unwrap_err(),
            MoveError::GameOver
        );
    }

    #[test]
    fn test_cube_game_alternates() {
        let mut game = GameState::<CubeBoard>::new(Player::X);
        game.attempt_move(Coord3::new(0, 0, 0)).unwrap();
        game.attempt_move(Coord3::new(3, 3, 3)).unwrap();
        assert_eq!(game.turn_state(), TurnState::AwaitingMove(Player::X));
        assert_eq!(game.board().get(Coord3::new(3, 3, 3)), Ok(Cell::O));
    }

    #[test]
    fn test_snapshot_resumes_after_reload() {
        let mut game = GameState::<CubeBoard>::new(Player::X);
        game.attempt_move(Coord3::new(0, 0, 0)).unwrap();
        game.attempt_move(Coord3::new(3, 3, 3)).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let mut restored: GameState<CubeBoard> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);

        restored.attempt_move(Coord3::new(1, 1, 1)).unwrap();
        assert_eq!(restored.board().get(Coord3::new(1, 1, 1)), Ok(Cell::X));
        assert_eq!(restored.current_player(), Player::O);
    }
}
