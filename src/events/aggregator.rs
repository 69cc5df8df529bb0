//! Event aggregator: the single owner of the authoritative game state.
//!
//! The aggregator applies events in order, keeps the event log, and fans
//! each new state out to registered observers.
//!
//! ## Application
//!
//! - `Initialized` ignores any prior state and produces the opening.
//! - `Moved(c)` plays `c` for the prior state's side to move.
//!
//! Events must be applied in their original order from `Initialized`;
//! a `Moved` with no prior state is reported as
//! [`EngineError::NotInitialized`], and a `Moved` to a cell off the board
//! as [`EngineError::OffBoard`]. Logs replayed from outside are not
//! otherwise validated.
//!
//! ## Observers
//!
//! Observers are called synchronously in registration order, once per
//! applied event. A failing observer is logged and recorded as an
//! [`ObserverFailure`]; the remaining observers are still notified.

use tracing::{debug, info, instrument, warn};

use super::event::{Event, EventRecord};
use crate::core::{GameConfig, GameState};
use crate::error::{EngineError, ObserverError};
use crate::rules::{apply_move, outcome, AppliedMove};

/// Receives every new authoritative state.
///
/// Closures of the form `FnMut(&GameState) -> Result<(), ObserverError>`
/// implement this trait.
pub trait StateObserver {
    /// Called after each applied event with the resulting state.
    fn state_updated(&mut self, state: &GameState) -> Result<(), ObserverError>;
}

impl<F> StateObserver for F
where
    F: FnMut(&GameState) -> Result<(), ObserverError>,
{
    fn state_updated(&mut self, state: &GameState) -> Result<(), ObserverError> {
        self(state)
    }
}

/// A recorded observer failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObserverFailure {
    /// Registration index of the failing observer.
    pub observer: usize,
    /// Sequence number of the event whose state was being delivered.
    pub sequence: u64,
    pub error: ObserverError,
}

/// Compute the state that follows `event`.
///
/// Pure: `prior` is not modified.
///
/// ```
/// use reversi_core::core::{Coordinate, Side};
/// use reversi_core::events::{apply, Event};
///
/// let opening = apply(None, Event::Initialized).unwrap();
/// let next = apply(Some(&opening), Event::Moved(Coordinate::new(2, 3))).unwrap();
///
/// assert_eq!(next.side_to_move(), Side::White);
/// assert_eq!(opening.used().len(), 4);
/// ```
pub fn apply(prior: Option<&GameState>, event: Event) -> Result<GameState, EngineError> {
    transition(prior, event).map(|(state, _)| state)
}

/// Rebuild a state from an ordered event sequence.
///
/// Returns `Ok(None)` for an empty sequence.
pub fn replay<I>(events: I) -> Result<Option<GameState>, EngineError>
where
    I: IntoIterator<Item = Event>,
{
    events
        .into_iter()
        .try_fold(None, |prior: Option<GameState>, event| {
            apply(prior.as_ref(), event).map(Some)
        })
}

fn transition(
    prior: Option<&GameState>,
    event: Event,
) -> Result<(GameState, Option<AppliedMove>), EngineError> {
    match event {
        Event::Initialized => Ok((GameState::opening(), None)),
        Event::Moved(coordinate) => {
            let prior = prior.ok_or(EngineError::NotInitialized)?;
            if !coordinate.in_bounds() {
                return Err(EngineError::OffBoard { coordinate });
            }
            let mut next = prior.clone();
            let side = next.side_to_move();
            let applied = apply_move(&mut next, side, coordinate);
            Ok((next, Some(applied)))
        }
    }
}

/// Owns the game state and the observer list for one game.
pub struct EventAggregator {
    state: Option<GameState>,
    log: Vec<EventRecord>,
    next_sequence: u64,
    observers: Vec<Box<dyn StateObserver + Send>>,
    failures: Vec<ObserverFailure>,
    config: GameConfig,
}

impl EventAggregator {
    /// Create an aggregator with no state yet.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: None,
            log: Vec::new(),
            next_sequence: 0,
            observers: Vec::new(),
            failures: Vec::new(),
            config,
        }
    }

    /// Append an observer. Observers cannot be removed.
    pub fn register(&mut self, observer: Box<dyn StateObserver + Send>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "observer registered");
    }

    // === Application ===

    /// Apply an event to the current state without notifying observers.
    ///
    /// When invariant checks are enabled, a resulting state that violates
    /// them is discarded and the current state is kept.
    #[instrument(level = "debug", skip(self), fields(sequence = self.next_sequence))]
    pub fn apply_event(&mut self, event: Event) -> Result<Option<AppliedMove>, EngineError> {
        let (next, applied) = transition(self.state.as_ref(), event)?;

        if self.config.check_invariants {
            next.check_invariants()?;
        }

        match &applied {
            None => info!(side_to_move = %next.side_to_move(), "game initialized"),
            Some(applied) => debug!(
                side = %applied.side,
                coordinate = %applied.coordinate,
                flips = applied.flip_count(),
                turn_skipped = applied.turn_skipped,
                "move applied"
            ),
        }
        if let Some(result) = outcome(&next) {
            info!(%result, "game concluded");
        }

        if self.config.record_events {
            self.log.push(EventRecord {
                sequence: self.next_sequence,
                event,
            });
        }
        self.next_sequence += 1;
        self.state = Some(next);

        Ok(applied)
    }

    /// Deliver the current state to every observer in registration order.
    ///
    /// Returns the number of observers that failed.
    pub fn notify(&mut self) -> usize {
        let Some(state) = self.state.as_ref() else {
            return 0;
        };
        let sequence = self.next_sequence.saturating_sub(1);

        let mut failed = 0;
        for (index, observer) in self.observers.iter_mut().enumerate() {
            if let Err(error) = observer.state_updated(state) {
                warn!(observer = index, sequence, %error, "observer failed");
                self.failures.push(ObserverFailure {
                    observer: index,
                    sequence,
                    error,
                });
                failed += 1;
            }
        }

        failed
    }

    /// Apply an event, then notify observers.
    pub fn send_event(&mut self, event: Event) -> Result<Option<AppliedMove>, EngineError> {
        let applied = self.apply_event(event)?;
        self.notify();
        Ok(applied)
    }

    // === Accessors ===

    /// The current state, if initialized.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    /// Applied events, in order. Empty when the log is disabled.
    #[must_use]
    pub fn event_log(&self) -> &[EventRecord] {
        &self.log
    }

    /// Number of events applied so far.
    #[must_use]
    pub fn event_count(&self) -> u64 {
        self.next_sequence
    }

    /// Observer failures recorded since the last drain.
    #[must_use]
    pub fn observer_failures(&self) -> &[ObserverFailure] {
        &self.failures
    }

    /// Remove and return the recorded observer failures.
    pub fn take_observer_failures(&mut self) -> Vec<ObserverFailure> {
        std::mem::take(&mut self.failures)
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for EventAggregator {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl std::fmt::Debug for EventAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventAggregator")
            .field("state", &self.state)
            .field("events", &self.next_sequence)
            .field("observers", &self.observers.len())
            .field("failures", &self.failures.len())
            .finish_non_exhaustive()
    }
}
