//! Game events: the minimal replay data produced by accepted commands.
//!
//! Events carry only what cannot be derived from the state they apply to.
//! `Moved` does not record its side; the aggregator reads the side to move
//! from the state being updated. An event log is therefore only meaningful
//! when replayed in order from `Initialized`.

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;

/// Something that happened to a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// The board was set to the opening position.
    Initialized,
    /// The side to move played at a coordinate.
    Moved(Coordinate),
}

impl Event {
    /// The played coordinate, for `Moved` events.
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Event::Moved(c) => Some(*c),
            Event::Initialized => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Initialized => write!(f, "Initialized"),
            Event::Moved(c) => write!(f, "Moved{c}"),
        }
    }
}

/// An applied event with its position in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Zero-based position in the log.
    pub sequence: u64,
    pub event: Event,
}

impl std::fmt::Display for EventRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.sequence, self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_coordinate() {
        assert_eq!(Event::Initialized.coordinate(), None);
        assert_eq!(
            Event::Moved(Coordinate::new(2, 3)).coordinate(),
            Some(Coordinate::new(2, 3))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Event::Moved(Coordinate::new(2, 3)).to_string(), "Moved(2, 3)");
        let record = EventRecord {
            sequence: 0,
            event: Event::Initialized,
        };
        assert_eq!(record.to_string(), "#0 Initialized");
    }

    #[test]
    fn test_serialization() {
        let log = vec![
            EventRecord { sequence: 0, event: Event::Initialized },
            EventRecord { sequence: 1, event: Event::Moved(Coordinate::new(5, 4)) },
        ];
        let json = serde_json::to_string(&log).unwrap();
        let back: Vec<EventRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(log, back);
    }
}
