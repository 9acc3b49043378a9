use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{GameConfig, WindowConfig};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::GameMode;
    use std::path::PathBuf;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().game.computer_move_delay_ms, 500);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            game: GameConfig {
                default_mode: GameMode::HumanVsComputer,
                computer_move_delay_ms: 250,
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();

        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(config, reloaded);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Path::new("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              default_mode: HumanVsComputer
              computer_move_delay_ms: 60000
            window:
              width: 420
              height: 560
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager = get_config_manager(&file_path);
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_unknown_mode_cant_be_read() {
        let content = r#"
            game:
              default_mode: ComputerVsComputer
              computer_move_delay_ms: 500
            window:
              width: 420
              height: 560
        "#;
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, String> = serializer.deserialize(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_tiny_window_is_rejected() {
        let config = Config {
            window: WindowConfig { width: 100, height: 100 },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
