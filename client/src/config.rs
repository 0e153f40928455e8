use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeSettings,
    /// Print the board after every tick.
    #[serde(default)]
    pub render: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_saved_config_is_read_back() {
        let file_path = get_temp_file_path();
        let config = Config {
            snake: SnakeSettings {
                columns: 32,
                rows: 18,
                cheating: true,
                ..SnakeSettings::default()
            },
            render: true,
        };

        get_config_manager(&file_path).set_config(&config).unwrap();
        let loaded = get_config_manager(&file_path).get_config().unwrap();
        let _ = std::fs::remove_file(&file_path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content(
                "snake:\n  columns: 2\n  rows: 9\n  cell_pixel_size: 40\n  draw_grid: true\n  \
                 rule_enforced: true\n  wraparound: false\n  cheating: false\n",
            )
            .unwrap();

        let result = get_config_manager(&file_path).get_config();
        let _ = std::fs::remove_file(&file_path);

        assert!(result.unwrap_err().contains("columns"));
    }
}
