//! Event sourcing: events, the event log, and the state-owning aggregator.
//!
//! Accepted commands become [`Event`]s. The [`EventAggregator`] applies
//! them in order to produce each new [`GameState`](crate::core::GameState)
//! and hands that state to every [`StateObserver`].

pub mod aggregator;
pub mod event;

pub use aggregator::{apply, replay, EventAggregator, ObserverFailure, StateObserver};
pub use event::{Event, EventRecord};
