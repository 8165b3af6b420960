//! Turn controller dispatching between human input and the computer.

use crate::action::MoveError;
use crate::board_game::BoardGame;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::types::{Outcome, Player, TurnState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Who acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// A human must supply coordinates for this player.
    Human(Player),
    /// The computer moves for this player.
    Computer(Player),
    /// No further moves are accepted.
    Finished(Outcome),
}

/// An accepted move and the state it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Transition<C> {
    /// The player who moved.
    pub mover: Player,
    /// Where the mark was placed.
    pub coords: C,
    /// State after the move.
    pub state: TurnState,
}

/// One game from first move to outcome.
///
/// Owns the game state exclusively together with the random source used
/// by the computer strategy.
#[derive(Debug)]
pub struct Session<B: BoardGame> {
    config: GameConfig,
    game: GameState<B>,
    rng: StdRng,
}

impl<B: BoardGame> Session<B> {
    /// Starts a session with an OS-seeded random source.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Starts a session whose computer moves are reproducible.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Starts a session with the given random source.
    #[instrument(skip(rng))]
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        info!(mode = ?config.mode, first = %config.first_player, "Session started");
        Self {
            config,
            game: GameState::new(config.first_player),
            rng,
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the game state.
    pub fn game(&self) -> &GameState<B> {
        &self.game
    }

    /// Returns the board.
    pub fn board(&self) -> &B {
        self.game.board()
    }

    /// Returns the turn state.
    pub fn turn_state(&self) -> TurnState {
        self.game.turn_state()
    }

    /// Reports who acts next.
    pub fn next_turn(&self) -> Turn {
        match self.game.turn_state() {
            TurnState::AwaitingMove(player) if self.config.mode.is_computer(player) => {
                Turn::Computer(player)
            }
            TurnState::AwaitingMove(player) => Turn::Human(player),
            TurnState::Won(player) => Turn::Finished(Outcome::Winner(player)),
            TurnState::Draw => Turn::Finished(Outcome::Draw),
        }
    }

    /// Applies a human move for the player to move.
    ///
    /// Rejections leave the session untouched; ask the same player again.
    #[instrument(skip(self))]
    pub fn submit(&mut self, coords: B::Coords) -> Result<Transition<B::Coords>, MoveError> {
        if let Turn::Computer(player) = self.next_turn() {
            return Err(MoveError::ComputerControlled(player));
        }
        self.apply(coords)
    }

    /// Lets the computer move for the player to move.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<Transition<B::Coords>, MoveError> {
        match self.next_turn() {
            Turn::Human(player) => Err(MoveError::HumanControlled(player)),
            Turn::Finished(_) => Err(MoveError::GameOver),
            Turn::Computer(_) => {
                let coords = self
                    .game
                    .board()
                    .choose_computer_move(&mut self.rng)
                    .ok_or(MoveError::GameOver)?;
                self.apply(coords)
            }
        }
    }

    fn apply(&mut self, coords: B::Coords) -> Result<Transition<B::Coords>, MoveError> {
        let mover = self.game.current_player();
        let state = self.game.attempt_move(coords)?;
        if let Some(outcome) = state.outcome() {
            info!(
                %outcome,
                winner = ?outcome.winner(),
                moves = self.game.history().len(),
                "Game finished"
            );
        }
        Ok(Transition::new(mover, coords, state))
    }
}
