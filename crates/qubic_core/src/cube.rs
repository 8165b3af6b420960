//! The 4x4x4 board.

use crate::action::MoveError;
use crate::board_game::{BoardGame, Coordinates};
use crate::rules::CUBE_LINES;
use crate::strategy;
use crate::types::Cell;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cells along each edge of the cube.
pub const SIDE: usize = 4;

type Layer = [[Cell; SIDE]; SIDE];

/// A cell address on the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord3 {
    /// Layer, first to last.
    pub layer: usize,
    /// Row within the layer.
    pub row: usize,
    /// Column within the layer.
    pub col: usize,
}

impl Coord3 {
    /// Creates coordinates.
    pub const fn new(layer: usize, row: usize, col: usize) -> Self {
        Self { layer, row, col }
    }
}

impl Coordinates for Coord3 {
    const AXES: &'static [&'static str] = &["layer", "row", "column"];
    const EXTENT: usize = SIDE;

    fn from_components(components: &[usize]) -> Option<Self> {
        match components {
            [layer, row, col] => Some(Self::new(*layer, *row, *col)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Coord3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.layer, self.row, self.col)
    }
}

/// 4x4x4 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeBoard {
    /// Cells indexed `[layer][row][col]`.
    cells: [Layer; SIDE],
}

impl CubeBoard {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layers of the cube.
    pub fn layers(&self) -> &[Layer; SIDE] {
        &self.cells
    }

    fn cell_mut(&mut self, coords: Coord3) -> Result<&mut Cell, MoveError> {
        self.cells
            .get_mut(coords.layer)
            .and_then(|layer| layer.get_mut(coords.row))
            .and_then(|row| row.get_mut(coords.col))
            .ok_or(MoveError::OutOfBounds)
    }
}

impl BoardGame for CubeBoard {
    type Coords = Coord3;
    type Line = [Coord3; SIDE];

    fn lines() -> &'static [Self::Line] {
        &CUBE_LINES
    }

    fn get(&self, coords: Coord3) -> Result<Cell, MoveError> {
        self.cells
            .get(coords.layer)
            .and_then(|layer| layer.get(coords.row))
            .and_then(|row| row.get(coords.col))
            .copied()
            .ok_or(MoveError::OutOfBounds)
    }

    #[instrument(skip(self))]
    fn set(&mut self, coords: Coord3, value: Cell) -> Result<(), MoveError> {
        let cell = self.cell_mut(coords)?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied);
        }
        *cell = value;
        Ok(())
    }

    fn cells(&self) -> impl Iterator<Item = (Coord3, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(layer, rows)| {
            rows.iter().enumerate().flat_map(move |(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, cell)| (Coord3::new(layer, row, col), *cell))
            })
        })
    }

    /// Picks uniformly among the empty cells.
    fn choose_computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord3> {
        strategy::uniform_random(self, rng)
    }
}

impl std::fmt::Display for CubeBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, layer) in self.layers().iter().enumerate() {
            writeln!(f, "Layer {}:", index + 1)?;
            for row in layer {
                let glyphs: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
                writeln!(f, "{}", glyphs.join(" | "))?;
            }
            writeln!(f, "{}", "-".repeat(17))?;
        }
        Ok(())
    }
}
