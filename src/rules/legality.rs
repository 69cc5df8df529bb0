//! Move legality: the ray-cast capture test.
//!
//! A cell is playable for a side when placing a disc there would sandwich
//! at least one straight run of opposing discs against an existing disc of
//! the same side. The test only walks rays that start at an adjacent
//! opposing disc ("anchor directions") and stops at the first ray that
//! resolves.

use smallvec::SmallVec;

use crate::core::{Board, Claim, Coordinate, CoordinateSet, Direction, LegalMoveSet, Side};

/// Directions worth walking from a candidate cell (at most 8).
pub type Directions = SmallVec<[Direction; 8]>;

/// Directions from `candidate` toward an immediately adjacent cell owned by
/// the opponent of `side`.
///
/// ```
/// use reversi_core::core::{Coordinate, Direction, GameState, Side};
/// use reversi_core::rules::anchor_directions;
///
/// let board = GameState::opening_board();
/// let anchors = anchor_directions(Side::Black, Coordinate::new(2, 3), &board);
///
/// // (3,3) is White; (3,4) is Black and not an anchor
/// assert_eq!(anchors.as_slice(), &[Direction::new(1, 0)]);
/// ```
#[must_use]
pub fn anchor_directions(side: Side, candidate: Coordinate, board: &Board) -> Directions {
    let opponent = side.opposite();
    Direction::ALL
        .into_iter()
        .filter(|&d| board.owned_by(candidate.step(d), opponent))
        .collect()
}

/// Walk outward from `candidate` and check if the ray ends on a disc of
/// `side` after crossing at least one opposing disc.
///
/// The walk fails on leaving the board or reaching an empty cell.
#[must_use]
pub fn direction_resolves(side: Side, candidate: Coordinate, direction: Direction, board: &Board) -> bool {
    let mut location = candidate.step(direction);
    let mut crossed_opponent = false;

    while location.in_bounds() {
        match board.claim(location) {
            Claim::Unclaimed => return false,
            Claim::Owned(owner) if owner == side => return crossed_opponent,
            Claim::Owned(_) => crossed_opponent = true,
        }
        location = location.step(direction);
    }

    false
}

/// Check if `side` may play at `candidate`.
///
/// Off-board and occupied cells are never legal.
#[must_use]
pub fn is_legal_move(side: Side, candidate: Coordinate, board: &Board) -> bool {
    if !candidate.in_bounds() || board.is_occupied(candidate) {
        return false;
    }

    anchor_directions(side, candidate, board)
        .into_iter()
        .any(|d| direction_resolves(side, candidate, d, board))
}

/// Every frontier cell that `side` may play.
///
/// Cells outside `frontier` are never examined.
#[must_use]
pub fn legal_moves(frontier: &CoordinateSet, board: &Board, side: Side) -> LegalMoveSet {
    let moves = frontier
        .iter()
        .copied()
        .filter(|&c| is_legal_move(side, c, board))
        .collect();

    LegalMoveSet::new(side, moves)
}
