//! File system persistence for configuration
//!
//! Reads and writes the config file with atomic replacement so a crash
//! mid-write never leaves a truncated file behind.

use crate::{AppConfig, ConfigError, ConfigResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Handles configuration file persistence
pub struct ConfigPersistence {
    config_path: PathBuf,
}

impl ConfigPersistence {
    /// Creates a new persistence handler for the given config file path
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Returns the path of the config file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    ///
    /// A missing file yields the defaults. An empty or unparsable file is
    /// an error so that a corrupted config is never silently discarded.
    pub fn load(&self) -> ConfigResult<AppConfig> {
        if !self.config_path.exists() {
            log::info!(
                "Config file not found at {}, using defaults",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let contents =
            fs::read_to_string(&self.config_path).map_err(|e| ConfigError::ReadError {
                path: self.config_path.clone(),
                source: e,
            })?;

        if contents.trim().is_empty() {
            return Err(ConfigError::ReadError {
                path: self.config_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "Config file is empty or contains only whitespace",
                ),
            });
        }

        let config: AppConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: self.config_path.clone(),
                source: e,
            })?;

        if let Err(errors) = config.validate() {
            // Warn but keep the loaded values so the user can fix them in place
            log::warn!("Config validation warnings: {}", errors.join("; "));
        }

        Ok(config)
    }

    /// Saves configuration to file atomically
    pub fn save(&self, config: &AppConfig) -> ConfigResult<()> {
        if let Err(errors) = config.validate() {
            return Err(ConfigError::ValidationError(errors.join("; ")));
        }

        let parent = self
            .config_path
            .parent()
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: format!("{} has no parent directory", self.config_path.display()),
            })?;

        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let toml_string = toml::to_string_pretty(config)?;

        let mut temp_file =
            NamedTempFile::new_in(parent).map_err(|e| ConfigError::WriteError {
                path: self.config_path.clone(),
                source: e,
            })?;
        temp_file
            .write_all(toml_string.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: self.config_path.clone(),
                source: e,
            })?;
        temp_file
            .persist(&self.config_path)
            .map_err(|e| ConfigError::WriteError {
                path: self.config_path.clone(),
                source: e.error,
            })?;

        log::debug!("Config saved to {}", self.config_path.display());
        Ok(())
    }
}

/// Returns the default config file path under the XDG config directory
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "booknest").ok_or_else(|| {
        ConfigError::PathResolutionError {
            reason: "no home directory available".to_string(),
        }
    })?;
    Ok(dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn persistence_in(dir: &TempDir) -> ConfigPersistence {
        ConfigPersistence::new(dir.path().join("config.toml"))
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let config = persistence.load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let mut config = AppConfig::default();
        config.database_path = PathBuf::from("/tmp/shelf.db");
        persistence.save(&config).unwrap();

        let loaded = persistence.load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        fs::write(persistence.config_path(), "   \n").unwrap();
        assert!(persistence.load().is_err());
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        fs::write(persistence.config_path(), "this is not TOML {{{").unwrap();
        assert!(matches!(
            persistence.load(),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("config.toml");
        let persistence = ConfigPersistence::new(nested.clone());

        persistence.save(&AppConfig::default()).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let mut config = AppConfig::default();
        config.database_path = PathBuf::new();
        assert!(matches!(
            persistence.save(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
