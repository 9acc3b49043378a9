use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::log;
use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::game_state::TicTacToeGameState;

pub const DEFAULT_COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);

/// A searched move, tagged with the state revision it was computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerMove {
    pub revision: u64,
    pub index: usize,
}

struct PendingComputerMove {
    revision: u64,
    handle: JoinHandle<()>,
}

/// Runs the computer's reply as a delayed task on a tokio runtime.
///
/// At most one job is outstanding. It is tied to the state revision it was scheduled for,
/// and any later `sync` against a different revision aborts it. Results travel back over a
/// channel and are applied by the owner of the game state in `poll`, so the state keeps a
/// single writer.
pub struct ComputerMoveScheduler {
    runtime: Handle,
    delay: Duration,
    pending: Option<PendingComputerMove>,
    move_tx: mpsc::UnboundedSender<ComputerMove>,
    move_rx: mpsc::UnboundedReceiver<ComputerMove>,
}

impl ComputerMoveScheduler {
    pub fn new(runtime: Handle, delay: Duration) -> Self {
        let (move_tx, move_rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            delay,
            pending: None,
            move_tx,
            move_rx,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Brings the pending job in line with `state`: drops a job scheduled for an older
    /// revision and schedules one when it is the computer's turn.
    pub fn sync(&mut self, state: &TicTacToeGameState) {
        let is_stale = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.revision != state.revision());
        if is_stale {
            self.cancel();
        }

        if self.pending.is_none() && state.is_computer_turn() {
            self.schedule(state.revision(), *state.board());
        }
    }

    fn schedule(&mut self, revision: u64, board: Board) {
        let delay = self.delay;
        let move_tx = self.move_tx.clone();

        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            match tokio::task::spawn_blocking(move || calculate_minimax_move(&board)).await {
                Ok(Some(index)) => {
                    let _ = move_tx.send(ComputerMove { revision, index });
                }
                Ok(None) => log!("Computer has no move on {}", board),
                Err(e) => log!("Computer move search failed: {}", e),
            }
        });

        log!("Computer move scheduled in {:?} (revision {})", delay, revision);
        self.pending = Some(PendingComputerMove { revision, handle });
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            log!("Computer move for revision {} cancelled", pending.revision);
        }
    }

    /// Applies whatever results are ready without waiting. Returns the cell played, if any.
    pub fn poll(&mut self, state: &mut TicTacToeGameState) -> Option<usize> {
        let mut applied = None;
        while let Ok(computer_move) = self.move_rx.try_recv() {
            if self.apply(state, computer_move) {
                applied = Some(computer_move.index);
            }
        }
        applied
    }

    pub async fn next_move(&mut self) -> Option<ComputerMove> {
        self.move_rx.recv().await
    }

    /// Applies `computer_move` only if it belongs to the pending job and the state has not
    /// moved on since it was scheduled.
    pub fn apply(&mut self, state: &mut TicTacToeGameState, computer_move: ComputerMove) -> bool {
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.revision == computer_move.revision)
            && state.revision() == computer_move.revision;

        if !is_current {
            log!(
                "Discarding stale computer move {} (revision {}, state at {})",
                computer_move.index,
                computer_move.revision,
                state.revision()
            );
            return false;
        }

        self.pending = None;
        match state.apply_computer_move(computer_move.index) {
            Ok(()) => true,
            Err(e) => {
                log!("Computer move {} rejected: {}", computer_move.index, e);
                false
            }
        }
    }
}

impl Drop for ComputerMoveScheduler {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}
