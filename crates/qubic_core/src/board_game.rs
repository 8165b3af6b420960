//! The capability shared by both board geometries.
//!
//! Each geometry supplies its grid storage, its coordinate type and its
//! table of winning lines. Validation, win/draw detection and empty-cell
//! enumeration are written once against this trait.

use crate::action::MoveError;
use crate::rules;
use crate::types::{Cell, Player};
use rand::Rng;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Coordinates addressing one cell of a board.
///
/// Components are unchecked; the board rejects out-of-range values with
/// [`MoveError::OutOfBounds`].
pub trait Coordinates: Copy + Debug + Display + Eq + Hash {
    /// Axis names, outermost first (e.g. `["row", "col"]`).
    const AXES: &'static [&'static str];

    /// Number of cells along every axis.
    const EXTENT: usize;

    /// Builds coordinates from raw components, outermost first.
    ///
    /// Returns `None` only when the number of components is wrong.
    fn from_components(components: &[usize]) -> Option<Self>;
}

/// A tic-tac-toe board of fixed geometry.
pub trait BoardGame: Clone + Debug + Default + Display + PartialEq {
    /// Coordinates addressing a cell.
    type Coords: Coordinates;

    /// One winning line of this geometry.
    type Line: AsRef<[Self::Coords]> + 'static;

    /// Every winning line, in the order they are scanned.
    fn lines() -> &'static [Self::Line];

    /// Returns the cell at `coords`.
    fn get(&self, coords: Self::Coords) -> Result<Cell, MoveError>;

    /// Writes `value` into an empty cell.
    fn set(&mut self, coords: Self::Coords, value: Cell) -> Result<(), MoveError>;

    /// All coordinates paired with their cell, in row-major order.
    fn cells(&self) -> impl Iterator<Item = (Self::Coords, Cell)> + '_;

    /// Picks a move for the computer-controlled side, `None` on a full board.
    fn choose_computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Self::Coords>;

    /// Places `player`'s mark at `coords`.
    ///
    /// On failure the board is left unchanged.
    fn apply_move(&mut self, coords: Self::Coords, player: Player) -> Result<(), MoveError> {
        self.set(coords, Cell::from(player))
    }

    /// Checks if no cell is empty.
    fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// All empty coordinates, in row-major order.
    fn empty_cells(&self) -> Vec<Self::Coords> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coords, _)| coords)
            .collect()
    }

    /// Returns the owner of a complete line, if any.
    fn find_winner(&self) -> Option<Player> {
        rules::find_winner(self)
    }

    /// Checks if the board is full with no winner.
    fn is_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Counts the marks each player has placed as `(x, o)`.
    fn mark_counts(&self) -> (usize, usize) {
        self.cells()
            .fold((0, 0), |(x, o), (_, cell)| match cell {
                Cell::X => (x + 1, o),
                Cell::O => (x, o + 1),
                Cell::Empty => (x, o),
            })
    }
}
