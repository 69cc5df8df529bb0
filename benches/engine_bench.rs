use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reversi_core::commands::{Command, RejectionLog};
use reversi_core::core::{Coordinate, GameConfig, GameState, Side};
use reversi_core::game::GameSession;
use reversi_core::rules::{apply_move, cells_to_flip, legal_moves};

const FULL_GAME: [(i32, i32); 60] = [
    (5, 4), (5, 5), (5, 6), (6, 4), (7, 4), (3, 5), (2, 2), (3, 2), (4, 2), (5, 1),
    (4, 1), (3, 1), (4, 0), (6, 5), (3, 6), (5, 7), (4, 6), (6, 3), (7, 5), (4, 5),
    (7, 2), (6, 2), (5, 3), (5, 2), (4, 7), (7, 3), (5, 0), (1, 2), (0, 2), (2, 3),
    (1, 4), (2, 4), (3, 7), (0, 4), (0, 5), (2, 7), (0, 3), (1, 3), (2, 6), (2, 5),
    (1, 5), (2, 0), (2, 1), (3, 0), (1, 0), (6, 7), (6, 1), (6, 0), (7, 0), (7, 1),
    (6, 6), (7, 7), (7, 6), (0, 6), (0, 7), (1, 6), (1, 7), (0, 1), (1, 1), (0, 0),
];

/// State halfway through the full game, where the frontier is widest.
fn midgame() -> GameState {
    let mut state = GameState::opening();
    for &m in &FULL_GAME[..30] {
        let side = state.side_to_move();
        apply_move(&mut state, side, Coordinate::from(m));
    }
    state
}

fn bench_legal_moves_opening(c: &mut Criterion) {
    let state = GameState::opening();
    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| legal_moves(black_box(state.frontier()), black_box(state.board()), Side::Black))
    });
}

fn bench_legal_moves_midgame(c: &mut Criterion) {
    let state = midgame();
    let side = state.side_to_move();
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| legal_moves(black_box(state.frontier()), black_box(state.board()), side))
    });
}

fn bench_cells_to_flip(c: &mut Criterion) {
    let state = midgame();
    let side = state.side_to_move();
    let target = state.legal_moves().iter().next();
    c.bench_function("cells_to_flip_midgame", |b| {
        b.iter(|| target.map(|t| cells_to_flip(black_box(state.board()), t, side)))
    });
}

fn bench_full_game_rules(c: &mut Criterion) {
    c.bench_function("full_game_apply_move", |b| {
        b.iter(|| {
            let mut state = GameState::opening();
            for &m in &FULL_GAME {
                let side = state.side_to_move();
                apply_move(&mut state, side, Coordinate::from(m));
            }
            black_box(state)
        })
    });
}

fn bench_full_game_session(c: &mut Criterion) {
    let config = GameConfig::default().with_invariant_checks(false);
    c.bench_function("full_game_session", |b| {
        b.iter(|| {
            let mut session = GameSession::with_config(config.clone());
            let mut rejections = RejectionLog::new();
            let _ = session.initialize(&mut rejections);
            for &m in &FULL_GAME {
                let Some(side) = session.state().map(GameState::side_to_move) else {
                    break;
                };
                let _ = session.execute_command(Command::play(side, Coordinate::from(m)), &mut rejections);
            }
            black_box(session)
        })
    });
}

criterion_group!(
    benches,
    bench_legal_moves_opening,
    bench_legal_moves_midgame,
    bench_cells_to_flip,
    bench_full_game_rules,
    bench_full_game_session,
);
criterion_main!(benches);
