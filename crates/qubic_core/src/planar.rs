//! The classic 3x3 board.

use crate::action::MoveError;
use crate::board_game::{BoardGame, Coordinates};
use crate::rules::PLANAR_LINES;
use crate::strategy;
use crate::types::Cell;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cells along each side of the classic board.
pub const SIDE: usize = 3;

/// A cell address on the classic board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord2 {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Coord2 {
    /// Creates coordinates.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl Coordinates for Coord2 {
    const AXES: &'static [&'static str] = &["row", "column"];
    const EXTENT: usize = SIDE;

    fn from_components(components: &[usize]) -> Option<Self> {
        match components {
            [row, col] => Some(Self::new(*row, *col)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Coord2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanarBoard {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIDE]; SIDE],
}

impl PlanarBoard {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.cells
    }

    fn cell_mut(&mut self, coords: Coord2) -> Result<&mut Cell, MoveError> {
        self.cells
            .get_mut(coords.row)
            .and_then(|row| row.get_mut(coords.col))
            .ok_or(MoveError::OutOfBounds)
    }
}

impl BoardGame for PlanarBoard {
    type Coords = Coord2;
    type Line = [Coord2; SIDE];

    fn lines() -> &'static [Self::Line] {
        &PLANAR_LINES
    }

    fn get(&self, coords: Coord2) -> Result<Cell, MoveError> {
        self.cells
            .get(coords.row)
            .and_then(|row| row.get(coords.col))
            .copied()
            .ok_or(MoveError::OutOfBounds)
    }

    #[instrument(skip(self))]
    fn set(&mut self, coords: Coord2, value: Cell) -> Result<(), MoveError> {
        let cell = self.cell_mut(coords)?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied);
        }
        *cell = value;
        Ok(())
    }

    fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coord2::new(row, col), *cell))
        })
    }

    /// Takes the first empty cell in row-major order.
    fn choose_computer_move<R: Rng + ?Sized>(&self, _rng: &mut R) -> Option<Coord2> {
        strategy::first_empty(self)
    }
}

impl std::fmt::Display for PlanarBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows().iter().enumerate() {
            let glyphs: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writeln!(f, "{}", glyphs.join(" | "))?;
            if index + 1 < SIDE {
                writeln!(f, "{}", "-".repeat(9))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_new_board_is_empty() {
        let board = PlanarBoard::new();
        assert_eq!(board.empty_cells().len(), SIDE * SIDE);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_then_get() {
        let mut board = PlanarBoard::new();
        board.apply_move(Coord2::new(2, 1), Player::O).unwrap();
        assert_eq!(board.get(Coord2::new(2, 1)), Ok(Cell::O));
        assert_eq!(board.rows()[2], [Cell::Empty, Cell::O, Cell::Empty]);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = PlanarBoard::new();
        board.apply_move(Coord2::new(0, 0), Player::X).unwrap();
        let before = board.clone();
        assert_eq!(
            board.apply_move(Coord2::new(0, 0), Player::O),
            Err(MoveError::CellOccupied)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = PlanarBoard::new();
        assert_eq!(board.get(Coord2::new(3, 0)), Err(MoveError::OutOfBounds));
        assert_eq!(
            board.apply_move(Coord2::new(0, 3), Player::X),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(board, PlanarBoard::new());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = PlanarBoard::new();
        board.apply_move(Coord2::new(0, 0), Player::X).unwrap();
        board.apply_move(Coord2::new(1, 1), Player::O).unwrap();
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 7);
        assert_eq!(empty[0], Coord2::new(0, 1));
        assert_eq!(empty[6], Coord2::new(2, 2));
        assert!(!empty.contains(&Coord2::new(1, 1)));
    }

    #[test]
    fn test_from_components_checks_arity_only() {
        assert_eq!(Coord2::from_components(&[1, 2]), Some(Coord2::new(1, 2)));
        assert_eq!(Coord2::from_components(&[7, 9]), Some(Coord2::new(7, 9)));
        assert_eq!(Coord2::from_components(&[1]), None);
        assert_eq!(Coord2::from_components(&[1, 2, 3]), None);
    }

    #[test]
    fn test_display() {
        let mut board = PlanarBoard::new();
        board.apply_move(Coord2::new(0, 0), Player::X).unwrap();
        board.apply_move(Coord2::new(2, 2), Player::O).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "X |   |  ");
        assert_eq!(lines[1], "---------");
        assert_eq!(lines[4], "  |   | O");
    }
}
