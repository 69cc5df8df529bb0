//! Final result of a concluded game.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Side, SideMap};

/// Result of a finished game, decided by disc count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// One side holds more discs.
    Winner(Side),
    /// Both sides hold the same number of discs.
    Draw,
}

impl GameOutcome {
    /// Decide the outcome from disc counts.
    #[must_use]
    pub fn from_counts(counts: &SideMap<usize>) -> Self {
        let black = counts[Side::Black];
        let white = counts[Side::White];

        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Side::Black),
            std::cmp::Ordering::Less => GameOutcome::Winner(Side::White),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameOutcome::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(side) => write!(f, "{side} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Outcome of `state`, or `None` while moves remain.
///
/// ```
/// use reversi_core::core::GameState;
/// use reversi_core::rules::outcome;
///
/// assert_eq!(outcome(&GameState::opening()), None);
/// ```
#[must_use]
pub fn outcome(state: &GameState) -> Option<GameOutcome> {
    state
        .is_concluded()
        .then(|| GameOutcome::from_counts(&state.disc_counts()))
}
