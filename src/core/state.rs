//! Game state: board, turn, and the incremental move-generation sets.
//!
//! ## GameState
//!
//! - `board`: who owns each cell
//! - `side_to_move`: whose turn it is
//! - `used`: every played cell (equal to the board's occupied cells)
//! - `frontier`: empty on-board cells touching at least one used cell
//! - `legal_moves`: the frontier cells playable by `side_to_move`
//!
//! The frontier is the only candidate pool for legality checks, so it is
//! maintained incrementally by [`crate::rules::apply_move`] instead of
//! being recomputed from the board.
//!
//! Uses `im` persistent sets so cloning a state (for observers or a
//! policy snapshot) is O(1).

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::coord::Coordinate;
use super::side::{Side, SideMap};
use crate::error::EngineError;
use crate::rules::legal_moves;

/// Ordered persistent set of coordinates.
pub type CoordinateSet = OrdSet<Coordinate>;

/// Cells a side may play, tagged with the side they were computed for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMoveSet {
    side: Side,
    moves: CoordinateSet,
}

impl LegalMoveSet {
    /// Create a move set for a side.
    #[must_use]
    pub fn new(side: Side, moves: CoordinateSet) -> Self {
        Self { side, moves }
    }

    /// The side these moves belong to.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Check if a coordinate is playable.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.moves.contains(&coordinate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Iterate moves in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.moves.iter().copied()
    }

    /// The underlying set.
    #[must_use]
    pub fn as_set(&self) -> &CoordinateSet {
        &self.moves
    }
}

/// Complete state of one game.
///
/// Owned by the event aggregator; everything else sees clones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Side,
    pub(crate) used: CoordinateSet,
    pub(crate) frontier: CoordinateSet,
    pub(crate) legal_moves: LegalMoveSet,
}

impl GameState {
    /// The four-disc starting position with Black to move.
    ///
    /// ```
    /// use reversi_core::core::{Coordinate, GameState, Side};
    ///
    /// let state = GameState::opening();
    /// assert_eq!(state.side_to_move(), Side::Black);
    /// assert_eq!(state.used().len(), 4);
    /// assert!(state.legal_moves().contains(Coordinate::new(2, 3)));
    /// ```
    #[must_use]
    pub fn opening() -> Self {
        Self::from_board(Self::opening_board(), Side::FIRST)
    }

    /// Board of the canonical opening.
    ///
    /// White holds (3,3) and (4,4); Black holds (4,3) and (3,4).
    #[must_use]
    pub fn opening_board() -> Board {
        let mut board = Board::empty();
        board.set(Coordinate::new(3, 3), Side::White);
        board.set(Coordinate::new(4, 4), Side::White);
        board.set(Coordinate::new(4, 3), Side::Black);
        board.set(Coordinate::new(3, 4), Side::Black);
        board
    }

    /// Derive a full state from an arbitrary board.
    ///
    /// Used and frontier sets are rebuilt from the occupied cells; legal
    /// moves are computed for `side_to_move` only (no turn-skip is applied).
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let used: CoordinateSet = board.occupied().map(|(c, _)| c).collect();
        let frontier = frontier_of(&used);
        let legal_moves = legal_moves(&frontier, &board, side_to_move);

        Self {
            board,
            side_to_move,
            used,
            frontier,
            legal_moves,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[must_use]
    pub fn used(&self) -> &CoordinateSet {
        &self.used
    }

    #[must_use]
    pub fn frontier(&self) -> &CoordinateSet {
        &self.frontier
    }

    #[must_use]
    pub fn legal_moves(&self) -> &LegalMoveSet {
        &self.legal_moves
    }

    /// Check if neither side can move.
    ///
    /// A state is only left with an empty move set when the turn-skip rule
    /// found no moves for either side.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// Number of discs per side.
    #[must_use]
    pub fn disc_counts(&self) -> SideMap<usize> {
        self.board.disc_counts()
    }

    /// Verify the structural invariants of the state.
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        if self.legal_moves.side() != self.side_to_move {
            return Err(EngineError::InvariantViolation {
                invariant: "legal moves belong to the side to move",
                detail: format!(
                    "side to move is {}, moves computed for {}",
                    self.side_to_move,
                    self.legal_moves.side()
                ),
            });
        }

        if let Some(stray) = self.legal_moves.iter().find(|c| !self.frontier.contains(c)) {
            return Err(EngineError::InvariantViolation {
                invariant: "legal moves are frontier cells",
                detail: format!("{stray} is legal but not on the frontier"),
            });
        }

        if let Some(overlap) = self.frontier.iter().find(|c| self.used.contains(*c)) {
            return Err(EngineError::InvariantViolation {
                invariant: "frontier and used cells are disjoint",
                detail: format!("{overlap} is both used and on the frontier"),
            });
        }

        let occupied: CoordinateSet = self.board.occupied().map(|(c, _)| c).collect();
        if occupied != self.used {
            return Err(EngineError::InvariantViolation {
                invariant: "used cells are exactly the occupied cells",
                detail: format!(
                    "{} occupied cells, {} used cells",
                    occupied.len(),
                    self.used.len()
                ),
            });
        }

        Ok(())
    }
}

/// Empty on-board cells adjacent to any used cell.
fn frontier_of(used: &CoordinateSet) -> CoordinateSet {
    used.iter()
        .flat_map(|c| c.neighborhood())
        .filter(|n| n.in_bounds() && !used.contains(n))
        .collect()
}
