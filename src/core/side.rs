//! Sides and per-side data storage.
//!
//! ## Side
//!
//! The two players of a game. `Black` always moves first.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used wherever the engine keeps
//! one value per side (disc counts, for instance).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// There is no ordering between sides; `Black` moving first is a rule of
/// the opening, not a property of the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Both sides, first mover first.
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    /// The side that moves first from the canonical opening.
    pub const FIRST: Side = Side::Black;

    /// The other side.
    ///
    /// ```
    /// use reversi_core::core::Side;
    ///
    /// assert_eq!(Side::Black.opposite(), Side::White);
    /// assert_eq!(Side::White.opposite().opposite(), Side::White);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Slot of this side in a [`SideMap`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    /// Single-character marker used by text renderings and board layouts.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }

    /// Inverse of [`Side::symbol`].
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'B' | 'b' => Some(Side::Black),
            'W' | 'w' => Some(Side::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use reversi_core::core::{Side, SideMap};
///
/// let mut discs: SideMap<u32> = SideMap::with_value(2);
/// discs[Side::White] += 1;
///
/// assert_eq!(discs[Side::Black], 2);
/// assert_eq!(discs[Side::White], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Black), factory(Side::White)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, first mover first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
