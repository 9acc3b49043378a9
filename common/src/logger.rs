use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        println!("{}", self.format_line(&timestamp, file, line, message));
    }
}

/// Installs the process-wide logger. Only the first call has an effect.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages logged before `init_logger` go through an unprefixed logger.
pub fn log(file: &str, line: u32, message: &str) {
    LOGGER.get_or_init(|| Logger::new(None)).log(file, line, message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None);
        let line = logger.format_line("2026-01-01 10:00:00.000", "common/src/games/tictactoe/game_state.rs", 42, "X played 4");
        assert_eq!(line, "[2026-01-01 10:00:00.000][game_state.rs:42] X played 4");
    }

    #[test]
    fn test_format_line_with_prefix_and_windows_path() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format_line("ts", "desktop-client\\src\\main.rs", 7, "started");
        assert_eq!(line, "[ts][Client][main.rs:7] started");
    }
}
