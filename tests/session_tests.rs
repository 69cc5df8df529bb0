//! End-to-end tests through the session API.
//!
//! Every move goes through the command policy, the aggregator, and the
//! observer fan-out exactly as a transport layer would drive it.

use std::sync::{Arc, Mutex};

use reversi_core::commands::{Command, PolicyState, RejectionLog};
use reversi_core::core::{Coordinate, GameConfig, GameState, Side};
use reversi_core::error::{EngineError, ObserverError, Rejection};
use reversi_core::events::Event;
use reversi_core::game::GameSession;
use reversi_core::rules::{legal_moves, GameOutcome};

/// A complete 60-move game with no skips, ending 29 to 35.
const FULL_GAME: [(i32, i32); 60] = [
    (5, 4), (5, 5), (5, 6), (6, 4), (7, 4), (3, 5), (2, 2), (3, 2), (4, 2), (5, 1),
    (4, 1), (3, 1), (4, 0), (6, 5), (3, 6), (5, 7), (4, 6), (6, 3), (7, 5), (4, 5),
    (7, 2), (6, 2), (5, 3), (5, 2), (4, 7), (7, 3), (5, 0), (1, 2), (0, 2), (2, 3),
    (1, 4), (2, 4), (3, 7), (0, 4), (0, 5), (2, 7), (0, 3), (1, 3), (2, 6), (2, 5),
    (1, 5), (2, 0), (2, 1), (3, 0), (1, 0), (6, 7), (6, 1), (6, 0), (7, 0), (7, 1),
    (6, 6), (7, 7), (7, 6), (0, 6), (0, 7), (1, 6), (1, 7), (0, 1), (1, 1), (0, 0),
];

/// White's last move leaves Black without a reply.
const SKIP_LINE: [(i32, i32); 8] = [(2, 3), (2, 2), (5, 4), (1, 3), (0, 3), (0, 4), (1, 1), (0, 2)];

/// Black captures every White disc on move nine.
const WIPEOUT: [(i32, i32); 9] = [(2, 3), (2, 2), (4, 5), (3, 5), (2, 5), (1, 3), (0, 3), (2, 4), (2, 1)];

/// Route engine logs to the test harness; filter with `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn started() -> (GameSession, RejectionLog) {
    init_tracing();
    let mut session = GameSession::with_config(GameConfig::default().with_invariant_checks(true));
    let mut rejections = RejectionLog::new();
    session.initialize(&mut rejections).unwrap();
    (session, rejections)
}

/// Play moves for whoever is to move, asserting each is accepted.
fn play_all(session: &mut GameSession, rejections: &mut RejectionLog, moves: &[(i32, i32)]) {
    for &m in moves {
        let side = session.state().unwrap().side_to_move();
        let command = Command::play(side, Coordinate::from(m));
        session
            .execute_command(command, rejections)
            .unwrap_or_else(|r| panic!("{command} rejected: {r}"));
    }
}

#[test]
fn test_first_move_end_to_end() {
    let (mut session, mut rejections) = started();

    let event = session
        .execute_command(Command::play(Side::Black, Coordinate::new(2, 3)), &mut rejections)
        .unwrap();
    assert_eq!(event, Event::Moved(Coordinate::new(2, 3)));

    let state = session.state().unwrap();
    assert_eq!(state.side_to_move(), Side::White);
    assert!(state.board().owned_by(Coordinate::new(3, 3), Side::Black));
    assert_eq!(state.disc_counts()[Side::Black], 4);
    assert_eq!(state.disc_counts()[Side::White], 1);

    let recomputed = legal_moves(state.frontier(), state.board(), Side::White);
    assert_eq!(state.legal_moves(), &recomputed);
    assert!(rejections.is_empty());
}

#[test]
fn test_full_game_fills_the_board() {
    let (mut session, mut rejections) = started();
    play_all(&mut session, &mut rejections, &FULL_GAME);

    let state = session.state().unwrap();
    assert!(rejections.is_empty());
    assert_eq!(state.board().occupied_count(), 64);
    assert_eq!(state.used().len(), 64);
    assert!(state.frontier().is_empty());
    assert!(session.is_concluded());
    assert_eq!(state.disc_counts()[Side::Black], 29);
    assert_eq!(state.disc_counts()[Side::White], 35);
    assert_eq!(session.outcome(), Some(GameOutcome::Winner(Side::White)));
    assert_eq!(session.event_log().len(), 61);
}

#[test]
fn test_turn_skip_keeps_the_mover() {
    let (mut session, mut rejections) = started();
    play_all(&mut session, &mut rejections, &SKIP_LINE);

    let state = session.state().unwrap();
    assert_eq!(state.side_to_move(), Side::White);
    assert_eq!(
        state.legal_moves().iter().collect::<Vec<_>>(),
        vec![Coordinate::new(2, 0), Coordinate::new(3, 1), Coordinate::new(5, 3)]
    );
    assert!(legal_moves(state.frontier(), state.board(), Side::Black).is_empty());

    let result = session.execute_command(Command::play(Side::Black, Coordinate::new(2, 0)), &mut rejections);
    assert_eq!(
        result,
        Err(Rejection::WrongSide {
            expected: Side::White,
            actual: Side::Black
        })
    );

    session
        .execute_command(Command::play(Side::White, Coordinate::new(2, 0)), &mut rejections)
        .unwrap();
}

#[test]
fn test_wipeout_concludes_the_policy() {
    let (mut session, mut rejections) = started();
    play_all(&mut session, &mut rejections, &WIPEOUT);

    assert!(matches!(session.policy_state(), PolicyState::Concluded(_)));
    assert_eq!(session.outcome(), Some(GameOutcome::Winner(Side::Black)));

    let state = session.state().unwrap();
    assert_eq!(state.used().len(), 13);
    assert_eq!(state.side_to_move(), Side::Black);

    let result = session.execute_command(Command::play(Side::Black, Coordinate::new(0, 0)), &mut rejections);
    assert_eq!(result, Err(Rejection::GameConcluded));
    assert_eq!(session.initialize(&mut rejections), Err(Rejection::GameConcluded));
    assert_eq!(rejections.len(), 2);
}

#[test]
fn test_replay_is_deterministic() {
    let (mut session, mut rejections) = started();
    play_all(&mut session, &mut rejections, &FULL_GAME[..30]);

    let events: Vec<Event> = session.event_log().iter().map(|r| r.event).collect();
    let first = GameSession::replay(events.iter().copied()).unwrap();
    let second = GameSession::replay(events.iter().copied()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.as_ref(), session.state());

    let rebuilt = GameSession::from_events(GameConfig::default(), events).unwrap();
    assert_eq!(rebuilt.state(), session.state());
    assert_eq!(rebuilt.policy_state(), session.policy_state());
}

#[test]
fn test_replay_rejects_off_board_moves() {
    let events: Vec<Event> = serde_json::from_str(r#"["Initialized",{"Moved":{"x":8,"y":3}}]"#).unwrap();

    assert_eq!(
        GameSession::replay(events),
        Err(EngineError::OffBoard {
            coordinate: Coordinate::new(8, 3)
        })
    );
}

#[test]
fn test_event_log_serializes() {
    let (mut session, mut rejections) = started();
    play_all(&mut session, &mut rejections, &SKIP_LINE);

    let json = serde_json::to_string(session.event_log()).unwrap();
    let log: Vec<reversi_core::events::EventRecord> = serde_json::from_str(&json).unwrap();
    let state = GameSession::replay(log.into_iter().map(|r| r.event)).unwrap();

    assert_eq!(state.as_ref(), session.state());
}

#[test]
fn test_commands_before_initialize_are_rejected() {
    let mut session = GameSession::new();
    let mut rejections = RejectionLog::new();

    let result = session.execute_command(Command::play(Side::Black, Coordinate::new(2, 3)), &mut rejections);
    assert_eq!(result, Err(Rejection::NotInitialized));
    assert!(session.state().is_none());
    assert_eq!(rejections.entries().len(), 1);
}

#[test]
fn test_failing_observer_is_isolated() {
    let (first, last) = (Arc::new(Mutex::new(0)), Arc::new(Mutex::new(0)));

    let mut session = GameSession::new();
    {
        let first = Arc::clone(&first);
        session.register_observer(move |_: &GameState| -> Result<(), ObserverError> {
            *first.lock().unwrap() += 1;
            Ok(())
        });
    }
    session.register_observer(|state: &GameState| -> Result<(), ObserverError> {
        if state.side_to_move() == Side::White {
            Err(ObserverError::new("renderer unavailable"))
        } else {
            Ok(())
        }
    });
    {
        let last = Arc::clone(&last);
        session.register_observer(move |_: &GameState| -> Result<(), ObserverError> {
            *last.lock().unwrap() += 1;
            Ok(())
        });
    }

    let mut rejections = RejectionLog::new();
    session.initialize(&mut rejections).unwrap();
    play_all(&mut session, &mut rejections, &FULL_GAME[..4]);

    assert_eq!(*first.lock().unwrap(), 5);
    assert_eq!(*last.lock().unwrap(), 5);

    let failures = session.observer_failures();
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|f| f.observer == 1));
    assert_eq!(
        failures.iter().map(|f| f.sequence).collect::<Vec<_>>(),
        vec![1, 3]
    );

    assert_eq!(session.take_observer_failures().len(), 2);
    assert!(session.observer_failures().is_empty());
}

#[test]
fn test_view_tracks_the_game() {
    let (mut session, mut rejections) = started();
    play_all(&mut session, &mut rejections, &[(2, 3)]);

    let view = session.view().unwrap();
    assert_eq!(view.side_to_move, Side::White);
    assert_eq!(view.owner(Coordinate::new(2, 3)), Some(Side::Black));
    assert_eq!(
        view.legal_moves,
        vec![Coordinate::new(2, 2), Coordinate::new(2, 4), Coordinate::new(4, 2)]
    );
    assert!(view.to_string().ends_with("White to move (B 4, W 1)"));
}
