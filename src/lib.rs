//! # reversi-core
//!
//! A Reversi engine built around a command/event loop.
//!
//! ## Design Principles
//!
//! 1. **Commands Are Requests**: a [`Command`] is validated by the
//!    [`CommandPolicy`] and only becomes an [`Event`] if it is legal right
//!    now. Rejections are reported, never dropped.
//!
//! 2. **Events Are Facts**: the [`EventAggregator`] is the only owner of
//!    the authoritative [`GameState`]. Events carry minimal replay data and
//!    replaying a log always yields the same state.
//!
//! 3. **Incremental Move Generation**: legality is only ever tested on the
//!    frontier (empty cells next to played ones), and the frontier is
//!    updated per move instead of rescanned.
//!
//! ## Architecture
//!
//! - **Closed Loop**: command → policy → event → aggregator → state →
//!   policy snapshot and observers.
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so the
//!   policy and observers can hold snapshots cheaply.
//!
//! ## Modules
//!
//! - `core`: Coordinates, sides, board, state, configuration
//! - `rules`: Legality, captures, turn handoff, outcomes
//! - `events`: Events, the event log, the aggregator and observers
//! - `commands`: Commands and the command policy
//! - `game`: Sessions and the board view
//! - `error`: Rejections and engine errors
//!
//! ## Quick Start
//!
//! ```
//! use reversi_core::{Command, Coordinate, GameSession, RejectionLog, Side};
//!
//! let mut session = GameSession::new();
//! let mut rejections = RejectionLog::new();
//!
//! session.initialize(&mut rejections).unwrap();
//! session
//!     .execute_command(Command::play(Side::Black, Coordinate::new(2, 3)), &mut rejections)
//!     .unwrap();
//!
//! // Black cannot move again while White has a reply
//! let again = session.execute_command(
//!     Command::play(Side::Black, Coordinate::new(2, 2)),
//!     &mut rejections,
//! );
//! assert!(again.is_err());
//! assert_eq!(rejections.len(), 1);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod events;
pub mod commands;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Claim, Coordinate, CoordinateSet, Direction, GameConfig, GameState, LegalMoveSet, Side, SideMap,
};

pub use crate::error::{EngineError, ObserverError, Rejection};

pub use crate::rules::{apply_move, cells_to_flip, is_legal_move, legal_moves, AppliedMove, GameOutcome};

pub use crate::events::{Event, EventAggregator, EventRecord, ObserverFailure, StateObserver};

pub use crate::commands::{Command, CommandPolicy, PolicyState, RejectionHandler, RejectionLog};

pub use crate::game::{BoardView, GameSession};
