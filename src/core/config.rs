//! Engine configuration.
//!
//! The rules themselves are fixed (8×8 board, canonical opening, Black
//! first). `GameConfig` only tunes how a session runs: which checks it
//! performs and what it records.

use serde::{Deserialize, Serialize};

/// Session configuration.
///
/// ## Example
///
/// ```
/// use reversi_core::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_invariant_checks(true)
///     .with_event_log(false);
///
/// assert!(config.check_invariants);
/// assert!(!config.record_events);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Verify state invariants after every applied event.
    /// A violating event is refused instead of committed.
    pub check_invariants: bool,

    /// Keep the ordered log of applied events (needed for replay).
    pub record_events: bool,

    /// Mark legal moves in text renderings of the board.
    pub show_legal_moves: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            check_invariants: cfg!(debug_assertions),
            record_events: true,
            show_legal_moves: true,
        }
    }
}

impl GameConfig {
    /// Enable or disable invariant checks.
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// Enable or disable the event log.
    #[must_use]
    pub fn with_event_log(mut self, enabled: bool) -> Self {
        self.record_events = enabled;
        self
    }

    /// Show or hide legal-move markers in text renderings.
    #[must_use]
    pub fn with_legal_move_markers(mut self, enabled: bool) -> Self {
        self.show_legal_moves = enabled;
        self
    }
}
