//! Core engine types: coordinates, sides, the board, state, configuration.
//!
//! These types carry no command or event logic. The rules operate on them
//! and the session owns them.

pub mod coord;
pub mod side;
pub mod board;
pub mod config;
pub mod state;

pub use coord::{Coordinate, Direction, BOARD_SIZE, CELL_COUNT};
pub use side::{Side, SideMap};
pub use board::{Board, Claim};
pub use config::GameConfig;
pub use state::{CoordinateSet, GameState, LegalMoveSet};
