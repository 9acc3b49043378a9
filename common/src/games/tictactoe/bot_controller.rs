use super::board::Board;
use super::types::Mark;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Picks the cell O should play, searching the full game tree without pruning.
///
/// Candidates are tried in index order and only a strictly better score replaces the
/// current best, so ties go to the lowest index. Returns `None` when the game is already
/// decided or no cell is free.
pub fn calculate_minimax_move(board: &Board) -> Option<usize> {
    if check_win(board).is_some() {
        return None;
    }

    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        board.set(index, Mark::O);
        let score = minimax(&mut board, 0, false);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores `board` from O's point of view. `depth` counts plies below the root move:
/// an O win scores `10 - depth`, an X win `-10 + depth`, a draw `0`.
pub(crate) fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    match check_win(board) {
        Some(Mark::O) => return WIN_SCORE - depth as i32,
        Some(Mark::X) => return -WIN_SCORE + depth as i32,
        _ => {}
    }

    if board.is_full() {
        return 0;
    }

    let (mark, mut best_score) = if is_maximizing {
        (Mark::O, i32::MIN)
    } else {
        (Mark::X, i32::MAX)
    };

    for index in board.available_moves() {
        board.set(index, mark);
        let score = minimax(board, depth + 1, !is_maximizing);
        board.set(index, Mark::Empty);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
