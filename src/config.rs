use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Glyphs used when printing the board as text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub one_symbol: char,
    pub two_symbol: char,
    pub empty_symbol: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            one_symbol: Player::One.symbol(),
            two_symbol: Player::Two.symbol(),
            empty_symbol: '.',
        }
    }
}

impl DisplayConfig {
    pub fn symbol_for(&self, player: Player) -> char {
        match player {
            Player::One => self.one_symbol,
            Player::Two => self.two_symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Offer "Play again?" after a win or draw instead of exiting.
    pub ask_play_again: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            ask_play_again: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Append logs to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "warn".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let DisplayConfig {
            one_symbol,
            two_symbol,
            empty_symbol,
        } = self.display;

        if one_symbol.is_whitespace() || two_symbol.is_whitespace() {
            return Err(ConfigError::Validation(
                "display player symbols must not be whitespace".into(),
            ));
        }
        if one_symbol == two_symbol
            || one_symbol == empty_symbol
            || two_symbol == empty_symbol
        {
            return Err(ConfigError::Validation(
                "display symbols must be distinct".into(),
            ));
        }

        if let Err(err) = tracing_subscriber::EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::Validation(format!(
                "logging.filter is not a valid filter: {err}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
one_symbol = "R"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.one_symbol, 'R');
        // Other fields should be defaults
        assert_eq!(config.display.two_symbol, 'O');
        assert!(config.session.ask_play_again);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_duplicate_symbols() {
        let mut config = AppConfig::default();
        config.display.two_symbol = 'X';
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.display.empty_symbol = 'O';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_player_symbol() {
        let mut config = AppConfig::default();
        config.display.one_symbol = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_empty_symbol_is_allowed() {
        let mut config = AppConfig::default();
        config.display.empty_symbol = ' ';
        config.validate().expect("space is a valid empty symbol");
    }

    #[test]
    fn test_symbol_for_player() {
        let display = DisplayConfig::default();
        assert_eq!(display.symbol_for(Player::One), 'X');
        assert_eq!(display.symbol_for(Player::Two), 'O');
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[session]
ask_play_again = false

[logging]
filter = "connect_four=debug"
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.session.ask_play_again);
        assert_eq!(config.logging.filter, "connect_four=debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\none_symbol = \"O\"\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("definitely_missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
