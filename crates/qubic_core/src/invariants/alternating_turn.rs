//! Alternating turn invariant: players take turns starting with the first player.

use super::Invariant;
use crate::board_game::BoardGame;
use crate::game::GameState;
use crate::types::TurnState;

/// Invariant: players alternate turns.
///
/// The history starts with the first player and never shows the same
/// player twice in a row. While the game is running the player to move is
/// the opponent of the last mover; once it has ended it is the last mover.
pub struct AlternatingTurnInvariant;

impl<B: BoardGame> Invariant<GameState<B>> for AlternatingTurnInvariant {
    fn holds(game: &GameState<B>) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.current_player() == game.first_player();
        };

        if history[0].player != game.first_player() {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match game.turn_state() {
            TurnState::AwaitingMove(player) => {
                player == game.current_player() && player == last.player.opponent()
            }
            TurnState::Won(_) | TurnState::Draw => game.current_player() == last.player,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
