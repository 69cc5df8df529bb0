//! Error types for the engine.
//!
//! - [`Rejection`]: a well-formed command that is not acceptable right now.
//!   State is never changed by a rejected command.
//! - [`EngineError`]: misuse of the lower-level APIs (applying an event to
//!   the wrong state, malformed board layouts, broken invariants).
//! - [`ObserverError`]: a state observer failed to process an update.

use thiserror::Error;

use crate::core::{Coordinate, Side};

/// Why a command was not accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    #[error("the game has not been initialized")]
    NotInitialized,

    #[error("the game is already initialized")]
    AlreadyInitialized,

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongSide { expected: Side, actual: Side },

    #[error("{coordinate} is not a legal move for {side}")]
    IllegalMove { side: Side, coordinate: Coordinate },

    #[error("the game is over")]
    GameConcluded,

    #[error("the event could not be applied: {0}")]
    Engine(#[from] EngineError),
}

/// Lower-level engine failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("cannot apply a move before the game is initialized")]
    NotInitialized,

    #[error("cannot apply a move to off-board cell {coordinate}")]
    OffBoard { coordinate: Coordinate },

    #[error("state invariant violated: {invariant} ({detail})")]
    InvariantViolation {
        invariant: &'static str,
        detail: String,
    },

    #[error("board layout must have {expected} rows, got {got}")]
    InvalidBoardHeight { expected: usize, got: usize },

    #[error("board row {row} must have {expected} cells, got {got}")]
    InvalidBoardWidth { row: usize, expected: usize, got: usize },

    #[error("invalid character '{character}' at ({x}, {y}) in board layout")]
    InvalidCellCharacter { character: char, x: usize, y: usize },
}

/// A state observer could not process an update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("observer failed: {message}")]
pub struct ObserverError {
    pub message: String,
}

impl ObserverError {
    /// Create a new observer error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
