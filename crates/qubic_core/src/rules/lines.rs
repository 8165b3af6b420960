//! Winning line tables for both geometries.

use crate::cube::{Coord3, SIDE as CUBE_SIDE};
use crate::planar::Coord2;

/// Number of winning lines on the 3x3 board.
pub const PLANAR_LINE_COUNT: usize = 8;

/// Number of winning lines on the 4x4x4 board.
pub const CUBE_LINE_COUNT: usize = 58;

const fn c2(row: usize, col: usize) -> Coord2 {
    Coord2::new(row, col)
}

/// Rows, columns and both diagonals of the 3x3 board.
pub const PLANAR_LINES: [[Coord2; 3]; PLANAR_LINE_COUNT] = [
    // Rows
    [c2(0, 0), c2(0, 1), c2(0, 2)],
    [c2(1, 0), c2(1, 1), c2(1, 2)],
    [c2(2, 0), c2(2, 1), c2(2, 2)],
    // Columns
    [c2(0, 0), c2(1, 0), c2(2, 0)],
    [c2(0, 1), c2(1, 1), c2(2, 1)],
    [c2(0, 2), c2(1, 2), c2(2, 2)],
    // Diagonals
    [c2(0, 0), c2(1, 1), c2(2, 2)],
    [c2(0, 2), c2(1, 1), c2(2, 0)],
];

/// Every winning line of the 4x4x4 board.
///
/// Order: in-layer rows and columns (40 lines, interleaved per index),
/// cross-layer verticals (16), in-layer diagonals (8), then the two
/// space diagonals from (0,0,0) and (0,3,3).
pub const CUBE_LINES: [[Coord3; CUBE_SIDE]; CUBE_LINE_COUNT] = build_cube_lines();

const fn build_cube_lines() -> [[Coord3; CUBE_SIDE]; CUBE_LINE_COUNT] {
    const LAST: usize = CUBE_SIDE - 1;
    let mut lines = [[Coord3::new(0, 0, 0); CUBE_SIDE]; CUBE_LINE_COUNT];
    let mut n = 0;

    // Rows and columns within each layer
    let mut layer = 0;
    while layer < CUBE_SIDE {
        let mut i = 0;
        while i < CUBE_SIDE {
            let mut k = 0;
            while k < CUBE_SIDE {
                lines[n][k] = Coord3::new(layer, i, k);
                lines[n + 1][k] = Coord3::new(layer, k, i);
                k += 1;
            }
            n += 2;
            i += 1;
        }
        layer += 1;
    }

    // Verticals through all layers
    let mut row = 0;
    while row < CUBE_SIDE {
        let mut col = 0;
        while col < CUBE_SIDE {
            let mut k = 0;
            while k < CUBE_SIDE {
                lines[n][k] = Coord3::new(k, row, col);
                k += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Diagonals within each layer
    let mut layer = 0;
    while layer < CUBE_SIDE {
        let mut k = 0;
        while k < CUBE_SIDE {
            lines[n][k] = Coord3::new(layer, k, k);
            lines[n + 1][k] = Coord3::new(layer, k, LAST - k);
            k += 1;
        }
        n += 2;
        layer += 1;
    }

    // Space diagonals
    let mut k = 0;
    while k < CUBE_SIDE {
        lines[n][k] = Coord3::new(k, k, k);
        lines[n + 1][k] = Coord3::new(k, LAST - k, LAST - k);
        k += 1;
    }
    n += 2;

    assert!(n == CUBE_LINE_COUNT);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_collinear(line: &[Coord3]) {
        // Each axis is either constant, ascending 0..4, or descending 3..=0.
        let axes: [fn(&Coord3) -> usize; 3] = [|c| c.layer, |c| c.row, |c| c.col];
        for axis in axes {
            let values: Vec<usize> = line.iter().map(axis).collect();
            let constant = values.iter().all(|v| *v == values[0]);
            let ascending = values == [0, 1, 2, 3];
            let descending = values == [3, 2, 1, 0];
            assert!(
                constant || ascending || descending,
                "line {:?} is not straight",
                line
            );
        }
    }

    #[test]
    fn test_planar_lines_are_distinct() {
        let unique: HashSet<_> = PLANAR_LINES.iter().collect();
        assert_eq!(unique.len(), PLANAR_LINE_COUNT);
    }

    #[test]
    fn test_cube_lines_are_distinct_and_straight() {
        let unique: HashSet<Vec<Coord3>> = CUBE_LINES
            .iter()
            .map(|line| {
                let mut cells = line.to_vec();
                cells.sort_by_key(|c| (c.layer, c.row, c.col));
                cells
            })
            .collect();
        assert_eq!(unique.len(), CUBE_LINE_COUNT);

        for line in &CUBE_LINES {
            assert_collinear(line);
        }
    }

    #[test]
    fn test_cube_line_breakdown() {
        let in_layer = CUBE_LINES
            .iter()
            .filter(|line| line.iter().all(|c| c.layer == line[0].layer))
            .count();
        let vertical = CUBE_LINES
            .iter()
            .filter(|line| line.iter().all(|c| c.row == line[0].row && c.col == line[0].col))
            .count();
        let space = CUBE_LINES
            .iter()
            .filter(|line| {
                line.iter().map(|c| c.layer).collect::<Vec<_>>() == [0, 1, 2, 3]
                    && line[0].row != line[1].row
                    && line[0].col != line[1].col
            })
            .count();

        assert_eq!(in_layer, 40);
        assert_eq!(vertical, 16);
        assert_eq!(space, 2);
    }

    #[test]
    fn test_space_diagonal_endpoints() {
        let tail = &CUBE_LINES[CUBE_LINE_COUNT - 2..];
        assert_eq!(tail[0][0], Coord3::new(0, 0, 0));
        assert_eq!(tail[0][3], Coord3::new(3, 3, 3));
        assert_eq!(tail[1][0], Coord3::new(0, 3, 3));
        assert_eq!(tail[1][3], Coord3::new(3, 0, 0));
    }
}
