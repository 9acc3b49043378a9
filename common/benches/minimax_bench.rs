use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::tictactoe::{calculate_minimax_move, Board, Mark};

fn bench_reply_to_center_opening() {
    let board: Board = "____X____".parse().unwrap();
    black_box(calculate_minimax_move(&board));
}

fn bench_reply_to_corner_opening() {
    let board: Board = "X________".parse().unwrap();
    black_box(calculate_minimax_move(&board));
}

fn bench_mid_game() {
    let board: Board = "X_O_X____".parse().unwrap();
    black_box(calculate_minimax_move(&board));
}

fn bench_full_game_against_first_free_cell() {
    let mut board = Board::new();
    loop {
        let Some(&x_move) = board.available_moves().first() else {
            break;
        };
        let mut cells = *board.cells();
        cells[x_move] = Mark::X;
        board = Board::from_cells(cells);

        let Some(o_move) = calculate_minimax_move(&board) else {
            break;
        };
        cells[o_move] = Mark::O;
        board = Board::from_cells(cells);
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("reply_center_opening", |b| {
        b.iter(bench_reply_to_center_opening)
    });

    group.bench_function("reply_corner_opening", |b| {
        b.iter(bench_reply_to_corner_opening)
    });

    group.bench_function("mid_game", |b| {
        b.iter(bench_mid_game)
    });

    group.bench_function("full_game", |b| {
        b.iter(bench_full_game_against_first_free_cell)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
