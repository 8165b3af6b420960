//! Qubic - console tic-tac-toe on a 3x3 board or a 4x4x4 cube.
//!
//! # Architecture
//!
//! - **Core**: board state, rules, computer strategy and turn control live in
//!   [`qubic_core`]
//! - **Config**: [`Settings`] from a TOML file layered under command-line flags
//! - **Console**: [`Console`] renders boards, runs menus and re-prompts on bad input
//!
//! # Example
//!
//! ```
//! use qubic::{Console, ModeChoice, Settings, Side};
//! use qubic_core::{Outcome, PlanarBoard, Player};
//!
//! let settings = Settings::new(Some(ModeChoice::HotSeat), Some(Side::X), None, None);
//! let moves = "0 0\n1 0\n0 1\n1 1\n0 2\n";
//! let mut console = Console::new(moves.as_bytes(), Vec::new());
//!
//! let outcome = console.run::<PlanarBoard>("Welcome!", &settings).unwrap();
//! assert_eq!(outcome, Outcome::Winner(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, ModeChoice, Settings, Side};
pub use console::{Console, ConsoleError, InputError, axes_phrase, parse_coords};
