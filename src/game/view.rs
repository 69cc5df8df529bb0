//! Read-only projection of a game for display and transport layers.
//!
//! A [`BoardView`] is a self-contained copy of what a renderer needs: who
//! owns each cell, whose turn it is, where that side may play, and the
//! score. It serializes with serde and renders as a plain-text grid:
//!
//! ```text
//!   0 1 2 3 4 5 6 7
//! 0 . . . . . . . .
//! 1 . . . . . . . .
//! 2 . . . * . . . .
//! 3 . . * W B . . .
//! 4 . . . B W * . .
//! 5 . . . . * . . .
//! 6 . . . . . . . .
//! 7 . . . . . . . .
//! Black to move (B 2, W 2)
//! ```
//!
//! `*` marks a legal move when markers are enabled.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, GameState, Side, SideMap, BOARD_SIZE};
use crate::rules::GameOutcome;

/// Snapshot of a game for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub side_to_move: Side,
    /// Cell owners in row-major order (`y * 8 + x`).
    pub cells: Vec<Option<Side>>,
    /// Legal moves of `side_to_move`, in coordinate order.
    pub legal_moves: Vec<Coordinate>,
    pub disc_counts: SideMap<usize>,
    pub concluded: bool,
    /// Mark legal moves in the text rendering.
    pub show_legal_moves: bool,
}

impl BoardView {
    /// Project a game state.
    #[must_use]
    pub fn from_state(state: &GameState, show_legal_moves: bool) -> Self {
        Self {
            side_to_move: state.side_to_move(),
            cells: Coordinate::all().map(|c| state.board().claim(c).owner()).collect(),
            legal_moves: state.legal_moves().iter().collect(),
            disc_counts: state.disc_counts(),
            concluded: state.is_concluded(),
            show_legal_moves,
        }
    }

    /// Owner of a cell. Off-board cells have none.
    #[must_use]
    pub fn owner(&self, coordinate: Coordinate) -> Option<Side> {
        coordinate
            .index()
            .and_then(|i| self.cells.get(i).copied().flatten())
    }

    /// Check if the side to move may play at a cell.
    #[must_use]
    pub fn is_legal(&self, coordinate: Coordinate) -> bool {
        self.legal_moves.contains(&coordinate)
    }

    /// Winner or draw, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.concluded
            .then(|| GameOutcome::from_counts(&self.disc_counts))
    }

    fn cell_symbol(&self, coordinate: Coordinate) -> char {
        match self.owner(coordinate) {
            Some(side) => side.symbol(),
            None if self.show_legal_moves && self.is_legal(coordinate) => '*',
            None => '.',
        }
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {x}")?;
        }
        writeln!(f)?;

        for y in 0..BOARD_SIZE {
            write!(f, "{y}")?;
            for x in 0..BOARD_SIZE {
                write!(f, " {}", self.cell_symbol(Coordinate::new(x, y)))?;
            }
            writeln!(f)?;
        }

        let black = self.disc_counts[Side::Black];
        let white = self.disc_counts[Side::White];
        match self.outcome() {
            Some(outcome) => write!(f, "Game over: {outcome} (B {black}, W {white})"),
            None => write!(f, "{} to move (B {black}, W {white})", self.side_to_move),
        }
    }
}
