//! Cell ownership: claims and the board.
//!
//! The board stores one `Option<Side>` per cell in a flat array indexed by
//! [`Coordinate::index`]. An empty cell *is* the unclaimed state; there is
//! no separate "unclaimed" marker to keep in sync.

use super::coord::{Coordinate, BOARD_SIZE, CELL_COUNT};
use super::side::{Side, SideMap};
use crate::error::EngineError;

/// Ownership status of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Claim {
    Unclaimed,
    Owned(Side),
}

impl Claim {
    /// Check if the cell belongs to `side`.
    ///
    /// ```
    /// use reversi_core::core::{Claim, Side};
    ///
    /// assert!(Claim::Owned(Side::Black).owned_by(Side::Black));
    /// assert!(!Claim::Owned(Side::Black).owned_by(Side::White));
    /// assert!(!Claim::Unclaimed.owned_by(Side::Black));
    /// ```
    #[must_use]
    pub const fn owned_by(self, side: Side) -> bool {
        match self {
            Claim::Owned(owner) => matches!(
                (owner, side),
                (Side::Black, Side::Black) | (Side::White, Side::White)
            ),
            Claim::Unclaimed => false,
        }
    }

    /// Check if any side owns the cell.
    #[must_use]
    pub const fn is_claimed(self) -> bool {
        matches!(self, Claim::Owned(_))
    }

    /// The owning side, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Claim::Owned(side) => Some(side),
            Claim::Unclaimed => None,
        }
    }
}

impl From<Option<Side>> for Claim {
    fn from(owner: Option<Side>) -> Self {
        owner.map_or(Claim::Unclaimed, Claim::Owned)
    }
}

/// The 8×8 grid of claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Side>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every cell unclaimed.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Parse a board from 8 rows of 8 characters each.
    ///
    /// `B`/`W` mark owned cells; `.`, `-` and `_` mark empty cells.
    ///
    /// ```
    /// use reversi_core::core::{Board, Coordinate, Side};
    ///
    /// let board = Board::from_rows(&[
    ///     "........",
    ///     "........",
    ///     "........",
    ///     "...WB...",
    ///     "...BW...",
    ///     "........",
    ///     "........",
    ///     "........",
    /// ]).unwrap();
    ///
    /// assert!(board.claim(Coordinate::new(4, 3)).owned_by(Side::Black));
    /// assert_eq!(board.occupied_count(), 4);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, EngineError> {
        let size = BOARD_SIZE as usize;
        if rows.len() != size {
            return Err(EngineError::InvalidBoardHeight {
                expected: size,
                got: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(EngineError::InvalidBoardWidth {
                    row: y,
                    expected: size,
                    got: width,
                });
            }

            for (x, character) in row.chars().enumerate() {
                match character {
                    '.' | '-' | '_' => {}
                    other => {
                        let side = Side::from_symbol(other)
                            .ok_or(EngineError::InvalidCellCharacter { character: other, x, y })?;
                        board.set(Coordinate::new(x as i32, y as i32), side);
                    }
                }
            }
        }

        Ok(board)
    }

    /// Ownership of a cell. Off-board coordinates are unclaimed.
    #[must_use]
    pub fn claim(&self, coordinate: Coordinate) -> Claim {
        coordinate
            .index()
            .and_then(|i| self.cells[i])
            .into()
    }

    /// Check if a cell is owned by `side`.
    #[must_use]
    pub fn owned_by(&self, coordinate: Coordinate, side: Side) -> bool {
        self.claim(coordinate).owned_by(side)
    }

    /// Check if a cell is owned by anyone.
    #[must_use]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.claim(coordinate).is_claimed()
    }

    /// Claim a cell for `side`.
    ///
    /// Off-board coordinates are ignored.
    pub fn set(&mut self, coordinate: Coordinate, side: Side) {
        if let Some(i) = coordinate.index() {
            self.cells[i] = Some(side);
        }
    }

    /// Iterate occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Side)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|side| (Coordinate::from_index(i), side)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of discs per side.
    #[must_use]
    pub fn disc_counts(&self) -> SideMap<usize> {
        let mut counts = SideMap::with_value(0);
        for (_, side) in self.occupied() {
            counts[side] += 1;
        }
        counts
    }
}
