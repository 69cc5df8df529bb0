//! Command policy: the state machine that accepts or rejects commands.
//!
//! ## States
//!
//! | State           | Accepts                               | Emits          |
//! |-----------------|---------------------------------------|----------------|
//! | `Uninitialized` | `Initialize`                          | `Initialized`  |
//! | `InProgress(s)` | `Move` by `s`'s side to move, to a cell in `s`'s legal moves | `Moved(c)` |
//! | `Concluded(s)`  | nothing                               |                |
//!
//! The policy never changes state on its own when it accepts a command.
//! It moves forward only when the session passes it the state the
//! resulting event produced, through [`CommandPolicy::observe`]. Its
//! snapshot is a clone of the aggregator's state and is never mutated.
//!
//! ## Rejections
//!
//! Every rejected command is reported synchronously to the caller's
//! [`RejectionHandler`] and returned as a [`Rejection`].

use tracing::warn;

use super::command::Command;
use crate::core::GameState;
use crate::error::Rejection;
use crate::events::Event;

/// Receives rejected commands.
///
/// Closures of the form `FnMut(&Command, &Rejection)` implement this trait.
pub trait RejectionHandler {
    fn invalid_command(&mut self, command: &Command, rejection: &Rejection);
}

impl<F> RejectionHandler for F
where
    F: FnMut(&Command, &Rejection),
{
    fn invalid_command(&mut self, command: &Command, rejection: &Rejection) {
        self(command, rejection);
    }
}

/// A rejection handler that keeps everything it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RejectionLog {
    entries: Vec<(Command, Rejection)>,
}

impl RejectionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejected commands with their reasons, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[(Command, Rejection)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent rejection.
    #[must_use]
    pub fn last(&self) -> Option<&(Command, Rejection)> {
        self.entries.last()
    }
}

impl RejectionHandler for RejectionLog {
    fn invalid_command(&mut self, command: &Command, rejection: &Rejection) {
        self.entries.push((*command, rejection.clone()));
    }
}

/// Where the policy is in the game's lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PolicyState {
    /// No state has been observed yet.
    #[default]
    Uninitialized,
    /// Moves remain; holds the latest observed state.
    InProgress(GameState),
    /// Neither side can move; holds the final state.
    Concluded(GameState),
}

impl PolicyState {
    /// The latest observed state, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&GameState> {
        match self {
            PolicyState::Uninitialized => None,
            PolicyState::InProgress(state) | PolicyState::Concluded(state) => Some(state),
        }
    }

    #[must_use]
    pub fn is_concluded(&self) -> bool {
        matches!(self, PolicyState::Concluded(_))
    }
}

impl std::fmt::Display for PolicyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyState::Uninitialized => write!(f, "Uninitialized"),
            PolicyState::InProgress(state) => write!(f, "InProgress({} to move)", state.side_to_move()),
            PolicyState::Concluded(_) => write!(f, "Concluded"),
        }
    }
}

/// Validates commands against the latest observed state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandPolicy {
    state: PolicyState,
}

impl CommandPolicy {
    /// A policy waiting for `Initialize`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &PolicyState {
        &self.state
    }

    /// Decide what a command would emit, without reporting anything.
    ///
    /// ```
    /// use reversi_core::commands::{Command, CommandPolicy};
    /// use reversi_core::core::{Coordinate, Side};
    /// use reversi_core::error::Rejection;
    /// use reversi_core::events::Event;
    ///
    /// let policy = CommandPolicy::new();
    ///
    /// assert_eq!(policy.evaluate(&Command::Initialize), Ok(Event::Initialized));
    /// assert_eq!(
    ///     policy.evaluate(&Command::play(Side::Black, Coordinate::new(2, 3))),
    ///     Err(Rejection::NotInitialized)
    /// );
    /// ```
    pub fn evaluate(&self, command: &Command) -> Result<Event, Rejection> {
        match (&self.state, *command) {
            (PolicyState::Uninitialized, Command::Initialize) => Ok(Event::Initialized),
            (PolicyState::Uninitialized, Command::Move { .. }) => Err(Rejection::NotInitialized),

            (PolicyState::InProgress(_), Command::Initialize) => Err(Rejection::AlreadyInitialized),
            (PolicyState::InProgress(state), Command::Move { side, coordinate }) => {
                let expected = state.side_to_move();
                if side != expected {
                    return Err(Rejection::WrongSide {
                        expected,
                        actual: side,
                    });
                }
                if !state.legal_moves().contains(coordinate) {
                    return Err(Rejection::IllegalMove { side, coordinate });
                }
                Ok(Event::Moved(coordinate))
            }

            (PolicyState::Concluded(_), _) => Err(Rejection::GameConcluded),
        }
    }

    /// Evaluate a command, reporting any rejection to `handler`.
    pub fn process_command<H>(&self, command: Command, handler: &mut H) -> Result<Event, Rejection>
    where
        H: RejectionHandler + ?Sized,
    {
        let verdict = self.evaluate(&command);
        if let Err(rejection) = &verdict {
            warn!(%command, %rejection, "command rejected");
            handler.invalid_command(&command, rejection);
        }
        verdict
    }

    /// Take a new snapshot of the authoritative state.
    pub fn observe(&mut self, state: &GameState) {
        self.state = if state.is_concluded() {
            PolicyState::Concluded(state.clone())
        } else {
            PolicyState::InProgress(state.clone())
        };
    }
}
