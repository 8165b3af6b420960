//! Line-oriented console front-end: menus, prompts, parsing and rendering.
//!
//! The console owns every retry loop. The core only ever sees parsed
//! coordinates and answers with a typed result.

use crate::config::{ModeChoice, Settings};
use derive_more::{Display, Error, From};
use qubic_core::{
    BoardGame, Coordinates, GameConfig, GameMode, MoveError, Outcome, Player, Session, Turn,
};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info, instrument, warn};

/// Error that ends a console session.
#[derive(Debug, Display, From, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// Input ended before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The core rejected a move the console cannot recover from.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

/// Why a line of input is not a usable move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputError {
    /// Wrong number of values, or a value that is not a number.
    #[display("Invalid input. Please enter {} numbers separated by spaces.", count_word(*expected))]
    Malformed {
        /// Number of values a move needs.
        expected: usize,
    },

    /// A value outside `0..=max`.
    #[display("Invalid input. Please enter numbers between 0 and {}.", max)]
    OutOfRange {
        /// Largest valid component.
        max: usize,
    },
}

fn count_word(n: usize) -> String {
    match n {
        2 => "two".to_string(),
        3 => "three".to_string(),
        other => other.to_string(),
    }
}

/// Joins axis names as English prose: `row and column`, `layer, row, and column`.
pub fn axes_phrase(axes: &[&str]) -> String {
    match axes {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Parses whitespace-separated coordinates, outermost axis first.
///
/// Range is only checked for negative or overflowing values; the board
/// reports anything else past the far edge.
pub fn parse_coords<C: Coordinates>(line: &str) -> Result<C, InputError> {
    let expected = C::AXES.len();
    let malformed = InputError::Malformed { expected };
    let out_of_range = InputError::OutOfRange {
        max: C::EXTENT - 1,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(malformed);
    }

    // `None` marks a number no board can index.
    let components = tokens
        .into_iter()
        .map(|token| match token.parse::<i64>() {
            Ok(value) => Ok(usize::try_from(value).ok()),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Ok(None)
            }
            Err(_) => Err(malformed),
        })
        .collect::<Result<Option<Vec<usize>>, _>>()?
        .ok_or(out_of_range)?;
    C::from_components(&components).ok_or(malformed)
}

/// Console front-end over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Greets, settles the configuration and plays one game.
    #[instrument(skip(self))]
    pub fn run<B: BoardGame>(
        &mut self,
        title: &str,
        settings: &Settings,
    ) -> Result<Outcome, ConsoleError> {
        writeln!(self.output, "{}", title)?;
        let config = self.configure(settings)?;
        let mut session = match settings.seed() {
            Some(seed) => Session::<B>::seeded(config, *seed),
            None => Session::<B>::new(config),
        };
        self.play(&mut session)
    }

    /// Builds the game configuration, asking for anything `settings` leaves open.
    #[instrument(skip(self))]
    pub fn configure(&mut self, settings: &Settings) -> Result<GameConfig, ConsoleError> {
        let mode = match settings.mode() {
            Some(mode) => *mode,
            None => {
                writeln!(self.output, "Choose game mode:")?;
                writeln!(self.output, "1. Play against computer")?;
                writeln!(self.output, "2. Play with a partner")?;
                match self.choose()? {
                    1 => ModeChoice::Computer,
                    _ => ModeChoice::HotSeat,
                }
            }
        };

        let config = match mode {
            ModeChoice::Computer => {
                let first = settings.first_player().map_or(Player::X, Player::from);
                let computer = match settings.computer() {
                    Some(side) => Player::from(*side),
                    None => {
                        writeln!(self.output, "Who plays first?")?;
                        writeln!(self.output, "1. Player")?;
                        writeln!(self.output, "2. Computer")?;
                        match self.choose()? {
                            2 => first,
                            _ => first.opponent(),
                        }
                    }
                };
                GameConfig::new(GameMode::VsComputer { computer }, first)
            }
            ModeChoice::HotSeat => {
                let first = match settings.first_player() {
                    Some(side) => Player::from(*side),
                    None => {
                        writeln!(self.output, "Who plays first?")?;
                        writeln!(self.output, "1. Player 1 (X)")?;
                        writeln!(self.output, "2. Player 2 (O)")?;
                        match self.choose()? {
                            1 => Player::X,
                            _ => Player::O,
                        }
                    }
                };
                GameConfig::new(GameMode::HotSeat, first)
            }
        };

        info!(?config, "Game configured");
        Ok(config)
    }

    /// Drives a session to its outcome, re-prompting on every rejected move.
    #[instrument(skip(self, session))]
    pub fn play<B: BoardGame>(&mut self, session: &mut Session<B>) -> Result<Outcome, ConsoleError> {
        self.show_board(session.board())?;

        loop {
            match session.next_turn() {
                Turn::Finished(outcome) => {
                    writeln!(self.output, "{}", outcome)?;
                    return Ok(outcome);
                }
                Turn::Computer(player) => {
                    writeln!(self.output, "Computer's turn:")?;
                    let transition = session.play_computer()?;
                    debug!(%player, coords = %transition.coords, "Computer moved");
                    self.show_board(session.board())?;
                }
                Turn::Human(player) => {
                    if self.human_turn(session, player)? {
                        self.show_board(session.board())?;
                    }
                }
            }
        }
    }

    /// Reads one move; returns whether it was accepted.
    fn human_turn<B: BoardGame>(
        &mut self,
        session: &mut Session<B>,
        player: Player,
    ) -> Result<bool, ConsoleError> {
        let max = <B::Coords as Coordinates>::EXTENT - 1;
        writeln!(
            self.output,
            "{}'s turn. Enter {} (0-{}):",
            player,
            axes_phrase(<B::Coords as Coordinates>::AXES),
            max
        )?;
        let line = self.read_line()?;

        let coords = match parse_coords::<B::Coords>(&line) {
            Ok(coords) => coords,
            Err(err) => {
                debug!(%err, input = line.trim(), "Unparseable move");
                writeln!(self.output, "{}", err)?;
                return Ok(false);
            }
        };

        match session.submit(coords) {
            Ok(_) => Ok(true),
            Err(MoveError::OutOfBounds) => {
                writeln!(self.output, "{}", InputError::OutOfRange { max })?;
                Ok(false)
            }
            Err(MoveError::CellOccupied) => {
                writeln!(self.output, "Cell is already occupied. Try again.")?;
                Ok(false)
            }
            Err(err) => {
                warn!(%err, "Move rejected");
                Err(err.into())
            }
        }
    }

    /// Asks until the answer is 1 or 2.
    fn choose(&mut self) -> Result<u8, ConsoleError> {
        loop {
            write!(self.output, "Enter 1 or 2: ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.trim().parse::<i64>() {
                Ok(1) => return Ok(1),
                Ok(2) => return Ok(2),
                Ok(_) => writeln!(self.output, "Invalid choice. Please enter 1 or 2.")?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }

    fn show_board<B: BoardGame>(&mut self, board: &B) -> Result<(), ConsoleError> {
        write!(self.output, "{}", board)?;
        self.output.flush()?;
        Ok(())
    }
}
