//! Game session: one game's command → event → state → policy loop.
//!
//! A [`GameSession`] owns a [`CommandPolicy`] and an [`EventAggregator`]
//! and wires them together. Each command is validated, applied and fanned
//! out completely before the call returns, so a transport only has to feed
//! one command stream per session.
//!
//! ## Notification order
//!
//! After an event is applied, the session hands the new state to the
//! policy directly, then external observers are notified in registration
//! order. The policy is not an observer itself; the session threads each
//! state into it explicitly.
//!
//! ## Example
//!
//! ```
//! use reversi_core::commands::{Command, RejectionLog};
//! use reversi_core::core::{Coordinate, Side};
//! use reversi_core::events::Event;
//! use reversi_core::game::GameSession;
//!
//! let mut session = GameSession::new();
//! let mut rejections = RejectionLog::new();
//!
//! session.initialize(&mut rejections).unwrap();
//! let event = session
//!     .execute_command(Command::play(Side::Black, Coordinate::new(2, 3)), &mut rejections)
//!     .unwrap();
//!
//! assert_eq!(event, Event::Moved(Coordinate::new(2, 3)));
//! assert_eq!(session.state().unwrap().side_to_move(), Side::White);
//! assert!(rejections.is_empty());
//! ```

use tracing::{instrument, warn};

use super::view::BoardView;
use crate::commands::{Command, CommandPolicy, PolicyState, RejectionHandler};
use crate::core::{GameConfig, GameState};
use crate::error::{EngineError, Rejection};
use crate::events::{self, Event, EventAggregator, EventRecord, ObserverFailure, StateObserver};
use crate::rules::{outcome, GameOutcome};

/// A single game instance.
#[derive(Debug, Default)]
pub struct GameSession {
    policy: CommandPolicy,
    aggregator: EventAggregator,
}

impl GameSession {
    /// A new, uninitialized session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            policy: CommandPolicy::new(),
            aggregator: EventAggregator::new(config),
        }
    }

    /// Rebuild a session by re-issuing an event log as commands.
    ///
    /// Every event is validated by the policy again, so a log that was not
    /// produced by a real game is rejected at the first bad event.
    /// Observers are not carried over.
    pub fn from_events<I>(config: GameConfig, events: I) -> Result<Self, Rejection>
    where
        I: IntoIterator<Item = Event>,
    {
        let mut session = Self::with_config(config);
        let mut ignore = |_: &Command, _: &Rejection| {};

        for event in events {
            let command = match (event, session.state()) {
                (Event::Initialized, _) => Command::Initialize,
                (Event::Moved(coordinate), Some(state)) => {
                    Command::play(state.side_to_move(), coordinate)
                }
                (Event::Moved(_), None) => return Err(Rejection::NotInitialized),
            };
            session.execute_command(command, &mut ignore)?;
        }

        Ok(session)
    }

    /// Rebuild only the state from an event log, without validation.
    ///
    /// Replaying the same log always produces the same state.
    pub fn replay<I>(events: I) -> Result<Option<GameState>, EngineError>
    where
        I: IntoIterator<Item = Event>,
    {
        events::replay(events)
    }

    /// Append an observer. It receives every state from now on.
    pub fn register_observer<O>(&mut self, observer: O)
    where
        O: StateObserver + Send + 'static,
    {
        self.aggregator.register(Box::new(observer));
    }

    // === Commands ===

    /// Issue `Initialize`.
    pub fn initialize<H>(&mut self, handler: &mut H) -> Result<Event, Rejection>
    where
        H: RejectionHandler + ?Sized,
    {
        self.execute_command(Command::Initialize, handler)
    }

    /// Validate, apply and publish a command.
    ///
    /// A rejected command is reported to `handler`, returned as `Err`, and
    /// leaves the game untouched.
    #[instrument(skip(self, handler))]
    pub fn execute_command<H>(&mut self, command: Command, handler: &mut H) -> Result<Event, Rejection>
    where
        H: RejectionHandler + ?Sized,
    {
        let event = self.policy.process_command(command, handler)?;

        if let Err(error) = self.aggregator.apply_event(event) {
            let rejection = Rejection::from(error);
            warn!(%rejection, "event could not be applied");
            handler.invalid_command(&command, &rejection);
            return Err(rejection);
        }

        if let Some(state) = self.aggregator.state() {
            self.policy.observe(state);
        }
        self.aggregator.notify();

        Ok(event)
    }

    // === Queries ===

    /// The authoritative state, once initialized.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.aggregator.state()
    }

    #[must_use]
    pub fn policy_state(&self) -> &PolicyState {
        self.policy.state()
    }

    /// Check if neither side can move.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.policy.state().is_concluded()
    }

    /// Winner or draw, once concluded.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state().and_then(outcome)
    }

    #[must_use]
    pub fn event_log(&self) -> &[EventRecord] {
        self.aggregator.event_log()
    }

    /// Observer failures recorded since the last drain.
    #[must_use]
    pub fn observer_failures(&self) -> &[ObserverFailure] {
        self.aggregator.observer_failures()
    }

    /// Remove and return the recorded observer failures.
    pub fn take_observer_failures(&mut self) -> Vec<ObserverFailure> {
        self.aggregator.take_observer_failures()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.aggregator.config()
    }

    /// Read projection for renderers, once initialized.
    #[must_use]
    pub fn view(&self) -> Option<BoardView> {
        let show_legal_moves = self.config().show_legal_moves;
        self.state()
            .map(|state| BoardView::from_state(state, show_legal_moves))
    }
}
