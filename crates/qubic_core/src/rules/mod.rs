//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board against its geometry's line table.
//! Rules are kept apart from board storage so both geometries share them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{CUBE_LINES, PLANAR_LINES};
pub use win::{find_winner, line_owner};
