use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, Criterion};
use tictac::{detect_win, GameHistory};

// Positions reached by a drawn game, a top-row win and a diagonal win.
const GAMES: [&[usize]; 3] = [
    &[0, 1, 2, 4, 3, 5, 7, 6, 8],
    &[0, 4, 1, 3, 2],
    &[4, 0, 2, 1, 6],
];

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let boards = GAMES
        .iter()
        .flat_map(|moves| {
            let mut history = GameHistory::new();
            for mv in *moves {
                history
                    .apply_move(*mv)
                    .expect("benchmark games only contain legal moves");
            }
            history
                .snapshots()
                .iter()
                .map(|snapshot| snapshot.board)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    criterion.bench_function("detect_win", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(detect_win(black_box(board)));
            }
        });
    });

    criterion.bench_function("play_drawn_game", |b| {
        b.iter(|| {
            let mut history = GameHistory::new();
            for mv in GAMES[0] {
                let _ = history.apply_move(black_box(*mv));
            }
            black_box(history.current_status())
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(300).warm_up_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
