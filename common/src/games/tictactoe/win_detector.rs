use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    match check_win(board) {
        Some(mark) => Outcome::Winner(mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
