use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub rotation: RotationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationConfig {
    pub participants: Vec<String>,
    /// Snapped back to the Monday of its week when a session starts.
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Enables the start-date picker and the reset / current-week shortcuts.
    #[serde(default = "default_date_picker")]
    pub date_picker: bool,
}

fn default_theme_name() -> String {
    "default".to_string()
}

fn default_date_picker() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            date_picker: default_date_picker(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(config_path: &Path) -> Result<Self, ConfigError> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("duty-rota")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(config_path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rotation: RotationConfig {
                participants: ["Marco", "Grigorij", "Sandy", "Kaloyan", "Hristo", "Nick"]
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
                start_date: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap_or_default(),
            },
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_six_participants() {
        let config = Config::default();
        assert_eq!(config.rotation.participants.len(), 6);
        assert_eq!(config.rotation.participants[0], "Marco");
    }

    #[test]
    fn default_config_starts_on_march_17_2025() {
        let config = Config::default();
        assert_eq!(config.rotation.start_date, NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());
    }

    #[test]
    fn default_config_enables_date_picker() {
        assert!(Config::default().ui.date_picker);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [rotation]
            participants = ["Marco", "Hristo", "Kaloyan", "Grigorij", "Sandy"]
            start_date = "2025-03-12"

            [ui]
            theme = "nord"
            date_picker = false
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.rotation.participants.len(), 5);
        assert_eq!(config.rotation.start_date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(config.ui.theme, "nord");
        assert!(!config.ui.date_picker);
    }

    #[test]
    fn missing_ui_section_uses_defaults() {
        let toml_content = r#"
            [rotation]
            participants = []
            start_date = "2025-01-06"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.ui, UiConfig::default());
        assert!(config.rotation.participants.is_empty());
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let result = Config::from_toml("this is not valid toml");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn invalid_start_date_returns_error() {
        let toml_content = r#"
            [rotation]
            participants = ["A"]
            start_date = "2025-02-30"
        "#;
        assert!(Config::from_toml(toml_content).is_err());
    }

    #[test]
    fn load_or_create_writes_default_then_reads_it_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_or_create_at(&path).unwrap();
        assert!(path.exists());

        let loaded = Config::load_or_create_at(&path).unwrap();
        assert_eq!(created, loaded);
    }
}
