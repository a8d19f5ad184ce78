use std::path::Path;

use crate::board::MIN_BOARD_SIZE;
use crate::error::ConfigError;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Number of mines placed per generation.
    pub mine_count: usize,
    /// Lives the player starts with.
    pub lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 8,
            mine_count: 20,
            lives: 3,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be >= {}",
                MIN_BOARD_SIZE
            )));
        }
        if self.board_size > 26 {
            return Err(ConfigError::Validation(
                "board_size must be <= 26 (position labels use letters A-Z)".into(),
            ));
        }
        let max_mines = self.board_size * self.board_size - 1;
        if self.mine_count > max_mines {
            return Err(ConfigError::Validation(format!(
                "mine_count must be <= {} for a board of size {}",
                max_mines, self.board_size
            )));
        }
        if self.lives == 0 {
            return Err(ConfigError::Validation("lives must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = "board_size = 10\n";
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board_size, 10);
        // Other fields should be defaults
        assert_eq!(config.mine_count, 20);
        assert_eq!(config.lives, 3);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.mine_count, 20);
        assert_eq!(config.lives, 3);
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = GameConfig::default();
        config.board_size = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = GameConfig::default();
        config.board_size = 27;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_too_many_mines() {
        let mut config = GameConfig::default();
        config.board_size = 3;
        config.mine_count = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_max_mines() {
        let mut config = GameConfig::default();
        config.board_size = 3;
        config.mine_count = 8;
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_zero_lives() {
        let mut config = GameConfig::default();
        config.lives = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board_size, 8);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minefield.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "mine_count = 5\nlives = 5").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.mine_count, 5);
        assert_eq!(config.lives, 5);
        // Others are defaults
        assert_eq!(config.board_size, 8);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minefield.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "board_size = 1").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
