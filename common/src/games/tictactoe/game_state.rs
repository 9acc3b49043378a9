use std::fmt;

use crate::log;
use super::board::{Board, CELL_COUNT};
use super::types::{GameMode, Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    CellOccupied,
    OutOfBounds,
    NotYourTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::CellOccupied => write!(f, "Cell is already marked"),
            MoveError::OutOfBounds => write!(f, "Position out of bounds"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for MoveError {}

/// The single game record. Every mutation bumps `revision`, which is what a pending
/// computer move is keyed on.
#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    mode: GameMode,
    last_move: Option<usize>,
    revision: u64,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            last_move: None,
            revision: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Winner(mark) => format!("Winner: {}", mark),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.current_mark),
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.current_mark == Mark::O
            && self.outcome() == Outcome::InProgress
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.last_move = None;
        self.bump_revision();
        log!("Game reset ({})", self.mode);
    }

    /// Switching to `HumanVsComputer` always starts a fresh game; switching back keeps the board.
    pub fn set_mode(&mut self, mode: GameMode) {
        log!("Mode changed: {} -> {}", self.mode, mode);
        self.mode = mode;
        if mode == GameMode::HumanVsComputer {
            self.reset();
        } else {
            self.bump_revision();
        }
    }

    /// Entry point for clicks. In `HumanVsComputer` the human only ever plays X.
    pub fn handle_human_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.mode == GameMode::HumanVsComputer && self.current_mark != Mark::X {
            return Err(MoveError::NotYourTurn);
        }
        self.place_mark(index)
    }

    pub fn apply_computer_move(&mut self, index: usize) -> Result<(), MoveError> {
        if !self.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.place_mark(index)
    }

    fn place_mark(&mut self, index: usize) -> Result<(), MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds);
        }

        if !self.board.is_empty_cell(index) {
            return Err(MoveError::CellOccupied);
        }

        let mark = self.current_mark;
        self.board.set(index, mark);
        self.last_move = Some(index);
        self.switch_turn();
        self.bump_revision();

        debug_assert!(self.turn_invariant_holds(), "turn out of sync with board {}", self.board);

        log!("{} played {} -> {}", mark, index, self.board);
        if self.outcome().is_over() {
            log!("Game over: {}", self.status_text());
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X { Mark::O } else { Mark::X };
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn turn_invariant_holds(&self) -> bool {
        let x_count = self.board.count(Mark::X);
        let o_count = self.board.count(Mark::O);
        let x_to_move = x_count == o_count;
        (x_to_move == (self.current_mark == Mark::X)) && (x_count == o_count || x_count == o_count + 1)
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
