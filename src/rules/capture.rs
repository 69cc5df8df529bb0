//! Applying a move: flips, incremental frontier upkeep, and turn handoff.
//!
//! ## Turn resolution
//!
//! After a move by `side`:
//!
//! 1. Legal moves are computed for the opponent. If any exist, the
//!    opponent moves next.
//! 2. Otherwise legal moves are computed for `side`, who moves again
//!    (the opponent's turn is skipped).
//! 3. If neither side has a move, `side` stays on move with an empty set
//!    and the game is concluded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::legality::{anchor_directions, legal_moves};
use crate::core::{Board, Claim, Coordinate, CoordinateSet, GameState, LegalMoveSet, Side};

/// Cells flipped by a single move.
///
/// A move rarely flips more than a dozen discs, so this stays inline.
pub type FlipList = SmallVec<[Coordinate; 16]>;

/// Summary of one applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// Side that moved.
    pub side: Side,
    /// Cell that was played.
    pub coordinate: Coordinate,
    /// Opposing discs that changed owner, grouped by direction.
    pub flipped: FlipList,
    /// Side whose turn it is now.
    pub next_to_move: Side,
    /// The opponent had no reply and `side` moves again.
    pub turn_skipped: bool,
    /// Neither side has a move.
    pub concluded: bool,
}

impl AppliedMove {
    /// Number of flipped discs.
    #[must_use]
    pub fn flip_count(&self) -> usize {
        self.flipped.len()
    }
}

/// Opposing cells that `side` captures by playing at `coordinate`.
///
/// Every direction is resolved on its own: a direction contributes its run
/// of opposing discs only when the run ends on a disc of `side`. The
/// played cell itself is not included.
///
/// ```
/// use reversi_core::core::{Coordinate, GameState, Side};
/// use reversi_core::rules::cells_to_flip;
///
/// let board = GameState::opening_board();
/// let flips = cells_to_flip(&board, Coordinate::new(2, 3), Side::Black);
///
/// assert_eq!(flips.as_slice(), &[Coordinate::new(3, 3)]);
/// ```
#[must_use]
pub fn cells_to_flip(board: &Board, coordinate: Coordinate, side: Side) -> FlipList {
    let mut flips = FlipList::new();

    for direction in anchor_directions(side, coordinate, board) {
        let mut run: SmallVec<[Coordinate; 8]> = SmallVec::new();
        let mut location = coordinate.step(direction);

        while location.in_bounds() {
            match board.claim(location) {
                Claim::Unclaimed => break,
                Claim::Owned(owner) if owner == side => {
                    flips.extend_from_slice(&run);
                    break;
                }
                Claim::Owned(_) => run.push(location),
            }
            location = location.step(direction);
        }
    }

    flips
}

/// Legal moves for whoever moves after `mover`, following the skip rule.
#[must_use]
pub fn next_turn(frontier: &CoordinateSet, board: &Board, mover: Side) -> LegalMoveSet {
    let reply = legal_moves(frontier, board, mover.opposite());
    if !reply.is_empty() {
        return reply;
    }

    legal_moves(frontier, board, mover)
}

/// Play `side` at `coordinate`, updating `state` in place.
///
/// The caller is responsible for checking legality first; this function
/// places the disc and flips whatever the position yields.
pub fn apply_move(state: &mut GameState, side: Side, coordinate: Coordinate) -> AppliedMove {
    let flipped = cells_to_flip(&state.board, coordinate, side);
    for &cell in &flipped {
        state.board.set(cell, side);
    }
    state.board.set(coordinate, side);

    // === Incremental frontier ===

    state.used.insert(coordinate);
    state.frontier.remove(&coordinate);
    for neighbor in coordinate.neighborhood() {
        if neighbor.in_bounds() && !state.used.contains(&neighbor) {
            state.frontier.insert(neighbor);
        }
    }

    // === Turn handoff ===

    let next = next_turn(&state.frontier, &state.board, side);
    let next_to_move = next.side();
    let concluded = next.is_empty();
    let turn_skipped = next_to_move == side && !concluded;

    state.side_to_move = next_to_move;
    state.legal_moves = next;

    trace!(
        %side,
        %coordinate,
        flips = flipped.len(),
        %next_to_move,
        turn_skipped,
        concluded,
        "move applied"
    );

    AppliedMove {
        side,
        coordinate,
        flipped,
        next_to_move,
        turn_skipped,
        concluded,
    }
}
