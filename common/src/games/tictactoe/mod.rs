mod board;
mod bot_controller;
mod game_state;
mod scheduler;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIDE, CELL_COUNT};
pub use bot_controller::calculate_minimax_move;
pub use game_state::{MoveError, TicTacToeGameState};
pub use scheduler::{ComputerMove, ComputerMoveScheduler, DEFAULT_COMPUTER_MOVE_DELAY};
pub use types::{GameMode, Mark, Outcome, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate_outcome, LINES};
