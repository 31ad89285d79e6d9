//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log level for application logging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Color theme preference for the terminal UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeChoice {
    Dark,
    Light,
    HighContrast,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Dark => write!(f, "dark"),
            ThemeChoice::Light => write!(f, "light"),
            ThemeChoice::HighContrast => write!(f, "high-contrast"),
        }
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Database file path (relative paths resolve against the working directory)
    pub database_path: PathBuf,

    /// Log level for application output
    pub log_level: LogLevel,

    /// Color theme for the terminal UI
    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("booknest.db"),
            log_level: LogLevel::Info,
            theme: ThemeChoice::Dark,
        }
    }
}

impl AppConfig {
    /// Validates the configuration, returning all problems found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.database_path.as_os_str().is_empty() {
            errors.push("database_path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_database_path_is_invalid() {
        let mut config = AppConfig::default();
        config.database_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.database_path = PathBuf::from("/tmp/books.db");
        config.log_level = LogLevel::Debug;
        config.theme = ThemeChoice::HighContrast;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let parsed: AppConfig = toml::from_str("log_level = \"warn\"").unwrap();
        assert_eq!(parsed.log_level, LogLevel::Warn);
        assert_eq!(parsed.database_path, PathBuf::from("booknest.db"));
        assert_eq!(parsed.theme, ThemeChoice::Dark);
    }

    #[test]
    fn test_theme_serializes_kebab_case() {
        let mut config = AppConfig::default();
        config.theme = ThemeChoice::HighContrast;
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("high-contrast"));
    }
}
