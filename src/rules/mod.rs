//! Reversi rules: legality, captures, turn handoff, and outcomes.
//!
//! Everything here is a pure function of a board (or a state it mutates
//! in place). Command validation and event bookkeeping live elsewhere and
//! call into this module.

pub mod capture;
pub mod legality;
pub mod outcome;

pub use capture::{apply_move, cells_to_flip, next_turn, AppliedMove, FlipList};
pub use legality::{anchor_directions, direction_resolves, is_legal_move, legal_moves, Directions};
pub use outcome::{outcome, GameOutcome};
