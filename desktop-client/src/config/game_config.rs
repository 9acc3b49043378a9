use common::config::Validate;
use common::games::tictactoe::{GameMode, DEFAULT_COMPUTER_MOVE_DELAY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub default_mode: GameMode,
    pub computer_move_delay_ms: u64,
}

impl GameConfig {
    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}, got {}",
                MAX_COMPUTER_MOVE_DELAY_MS, self.computer_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_mode: GameMode::HumanVsHuman,
            computer_move_delay_ms: DEFAULT_COMPUTER_MOVE_DELAY.as_millis() as u64,
        }
    }
}
