//! Configuration for BookNest
//!
//! One small TOML file under the XDG config directory: the database path,
//! the log level, and the UI theme. Loading falls back to defaults when the
//! file is absent; saving is atomic.

mod app_config;
mod error;
mod persistence;

pub use app_config::{AppConfig, LogLevel, ThemeChoice};
pub use error::{ConfigError, ConfigResult};
pub use persistence::{default_config_path, ConfigPersistence};

use std::path::{Path, PathBuf};

/// High-level configuration access
pub struct ConfigManager {
    persistence: ConfigPersistence,
}

impl ConfigManager {
    /// Creates a manager using the default XDG config location
    pub fn new() -> ConfigResult<Self> {
        Ok(Self {
            persistence: ConfigPersistence::new(default_config_path()?),
        })
    }

    /// Creates a manager rooted at the given directory (used by tests)
    pub fn with_directory(dir: PathBuf) -> ConfigResult<Self> {
        Ok(Self {
            persistence: ConfigPersistence::new(dir.join("config.toml")),
        })
    }

    /// Returns the path of the config file
    pub fn config_path(&self) -> &Path {
        self.persistence.config_path()
    }

    /// Loads the configuration, falling back to defaults on any failure
    ///
    /// Failures are logged; a corrupted file never prevents startup.
    pub fn load_or_default(&self) -> AppConfig {
        match self.persistence.load() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to load config, using defaults: {}", err);
                AppConfig::default()
            }
        }
    }

    /// Loads the configuration, propagating failures
    pub fn load(&self) -> ConfigResult<AppConfig> {
        self.persistence.load()
    }

    /// Saves the configuration atomically
    pub fn save(&self, config: &AppConfig) -> ConfigResult<()> {
        self.persistence.save(config)
    }
}
