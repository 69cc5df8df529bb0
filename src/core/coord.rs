//! Board geometry: coordinates, directions, and neighborhoods.
//!
//! The board is a fixed 8×8 grid. Coordinates are signed so that stepping
//! off an edge produces a representable (out-of-bounds) value instead of
//! an underflow; callers check `in_bounds` before touching the board.
//!
//! ## Layout
//!
//! - `x` is the column (0 = left), `y` is the row (0 = top).
//! - Cells are linearized row-major: `index = y * 8 + x`.
//!
//! ## Usage
//!
//! ```
//! use reversi_core::core::{Coordinate, Direction};
//!
//! let c = Coordinate::new(0, 0);
//! assert!(c.in_bounds());
//!
//! // Stepping off the edge is representable, just not in bounds
//! let off = c.step(Direction::new(-1, 0));
//! assert!(!off.in_bounds());
//!
//! // Corners still have 8 neighbors; only 3 of them are on the board
//! assert_eq!(c.neighborhood().filter(|n| n.in_bounds()).count(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A cell position on the board.
///
/// Ordered by `x`, then `y`, so it can key ordered sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on the 8×8 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Move one step in a direction.
    ///
    /// Saturates at the `i32` limits; a saturated coordinate is off the
    /// board either way.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        Self {
            x: self.x.saturating_add(direction.dx),
            y: self.y.saturating_add(direction.dy),
        }
    }

    /// The 8 surrounding cells, in `Direction::ALL` order.
    ///
    /// Neighbors are not bounds-filtered.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        Direction::ALL.into_iter().map(move |d| self.step(d))
    }

    /// Row-major index of the cell, or `None` when off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some((self.y * BOARD_SIZE + self.x) as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Coordinate::index`].
    ///
    /// ```
    /// use reversi_core::core::Coordinate;
    ///
    /// let c = Coordinate::new(5, 2);
    /// assert_eq!(Coordinate::from_index(c.index().unwrap()), c);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        let index = index as i32;
        Self {
            x: index % BOARD_SIZE,
            y: index / BOARD_SIZE,
        }
    }

    /// Iterate every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A unit step toward one of the 8 neighboring cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    /// All 8 compass directions: offsets in {-1,0,1}² except (0,0).
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    /// Create a new direction.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// The offset that leads from `from` to `to`.
    #[must_use]
    pub const fn between(from: Coordinate, to: Coordinate) -> Self {
        Self {
            dx: to.x - from.x,
            dy: to.y - from.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_in_bounds() {
        assert!(Coordinate::new(0, 0).in_bounds());
        assert!(Coordinate::new(7, 7).in_bounds());
        assert!(!Coordinate::new(8, 0).in_bounds());
        assert!(!Coordinate::new(0, -1).in_bounds());
        assert!(!Coordinate::new(500, 140).in_bounds());
    }

    #[test]
    fn test_neighborhood_excludes_center() {
        let center = Coordinate::new(3, 3);
        let neighbors: HashSet<_> = center.neighborhood().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        for n in &neighbors {
            assert!((n.x - center.x).abs() <= 1);
            assert!((n.y - center.y).abs() <= 1);
        }
    }

    #[test]
    fn test_step() {
        let c = Coordinate::new(2, 3);
        assert_eq!(c.step(Direction::new(1, -1)), Coordinate::new(3, 2));
        assert_eq!(c.step(Direction::new(0, 0)), c);
    }

    #[test]
    fn test_step_at_integer_limits_stays_off_board() {
        let far = Coordinate::new(i32::MAX, 3);
        assert_eq!(far.step(Direction::new(1, 0)), far);
        assert!(!far.step(Direction::new(1, 0)).in_bounds());

        let near = Coordinate::new(i32::MIN, i32::MIN).step(Direction::new(-1, -1));
        assert_eq!(near, Coordinate::new(i32::MIN, i32::MIN));
    }

    #[test]
    fn test_direction_between() {
        let from = Coordinate::new(2, 3);
        let to = Coordinate::new(3, 3);
        assert_eq!(Direction::between(from, to), Direction::new(1, 0));
        assert_eq!(from.step(Direction::between(from, to)), to);
    }

    #[test]
    fn test_index_round_trip_covers_board() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(all.len(), CELL_COUNT);
        for (i, c) in all.iter().enumerate() {
            assert_eq!(c.index(), Some(i));
        }
        assert_eq!(Coordinate::new(-1, 0).index(), None);
        assert_eq!(Coordinate::new(0, 8).index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coordinate::new(2, 3)), "(2, 3)");
    }
}
