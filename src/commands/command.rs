//! Commands: requests from a player or transport to change the game.
//!
//! A command is a request, not a fact. It becomes an
//! [`Event`](crate::events::Event) only if the command policy accepts it.
//!
//! ```
//! use reversi_core::commands::Command;
//! use reversi_core::core::{Coordinate, Side};
//!
//! let start = Command::initialize();
//! let play = Command::play(Side::Black, Coordinate::new(2, 3));
//!
//! assert_eq!(play.side(), Some(Side::Black));
//! assert_eq!(start.to_string(), "Initialize");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Side};

/// A request to change the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Set up the opening position.
    Initialize,
    /// Play `side` at `coordinate`.
    Move { side: Side, coordinate: Coordinate },
}

impl Command {
    #[must_use]
    pub const fn initialize() -> Self {
        Command::Initialize
    }

    /// Create a move command.
    #[must_use]
    pub const fn play(side: Side, coordinate: Coordinate) -> Self {
        Command::Move { side, coordinate }
    }

    /// The side issuing a move, if this is one.
    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        match self {
            Command::Move { side, .. } => Some(*side),
            Command::Initialize => None,
        }
    }

    /// The target cell of a move, if this is one.
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Command::Move { coordinate, .. } => Some(*coordinate),
            Command::Initialize => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Initialize => write!(f, "Initialize"),
            Command::Move { side, coordinate } => write!(f, "Move({side} at {coordinate})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let play = Command::play(Side::White, Coordinate::new(4, 2));
        assert_eq!(play.side(), Some(Side::White));
        assert_eq!(play.coordinate(), Some(Coordinate::new(4, 2)));

        assert_eq!(Command::initialize().side(), None);
        assert_eq!(Command::initialize().coordinate(), None);
    }

    #[test]
    fn test_display() {
        let play = Command::play(Side::Black, Coordinate::new(2, 3));
        assert_eq!(play.to_string(), "Move(Black at (2, 3))");
    }

    #[test]
    fn test_serialization() {
        let play = Command::play(Side::Black, Coordinate::new(2, 3));
        let json = serde_json::to_string(&play).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(play, back);
    }
}
