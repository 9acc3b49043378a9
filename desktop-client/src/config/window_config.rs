use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < 300 || self.height < 360 {
            return Err(format!(
                "window must be at least 300x360, got {}x{}",
                self.width, self.height
            ));
        }
        if self.width > 4000 || self.height > 4000 {
            return Err(format!(
                "window must not exceed 4000x4000, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420,
            height: 560,
        }
    }
}
