//! Pure tic-tac-toe game logic for the classic 3x3 board and the 4x4x4 cube.
//!
//! # Architecture
//!
//! - **Boards**: [`PlanarBoard`] and [`CubeBoard`] implement [`BoardGame`],
//!   each with its own coordinates and winning line table
//! - **Rules**: win and draw detection written once against [`BoardGame`]
//! - **Game**: [`GameState`] applies moves under [`contracts`] and checks
//!   [`invariants`] in debug builds
//! - **Session**: [`Session`] decides whether a human or the computer moves
//!
//! # Example
//!
//! ```
//! use qubic_core::{Coord2, GameConfig, PlanarBoard, Player, Session, Turn, TurnState};
//!
//! let mut session = Session::<PlanarBoard>::new(GameConfig::vs_computer(Player::O));
//! assert_eq!(session.next_turn(), Turn::Human(Player::X));
//!
//! session.submit(Coord2::new(1, 1)).unwrap();
//! let reply = session.play_computer().unwrap();
//! assert_eq!(reply.coords, Coord2::new(0, 0));
//! assert_eq!(reply.state, TurnState::AwaitingMove(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board_game;
mod config;
pub mod contracts;
mod cube;
mod game;
pub mod invariants;
mod planar;
pub mod rules;
mod session;
pub mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use board_game::{BoardGame, Coordinates};
pub use config::{GameConfig, GameMode};
pub use cube::{Coord3, CubeBoard};
pub use game::GameState;
pub use planar::{Coord2, PlanarBoard};
pub use rules::{CUBE_LINES, PLANAR_LINES};
pub use session::{Session, Transition, Turn};
pub use types::{Cell, Outcome, Player, TurnState};
