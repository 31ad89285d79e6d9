//! Integration tests for the configuration system

use booknest_config::{AppConfig, ConfigManager, LogLevel, ThemeChoice};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_manager() -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())?;
    Ok((temp_dir, manager))
}

#[test]
fn test_load_or_default_without_file() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let config = manager.load_or_default();
    assert_eq!(config, AppConfig::default());

    Ok(())
}

#[test]
fn test_corrupted_config_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let config_path = manager.config_path().to_path_buf();
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, "this is not valid TOML {{{")?;

    let config = manager.load_or_default();
    assert_eq!(config, AppConfig::default());

    // But the strict loader reports the problem
    assert!(manager.load().is_err());

    Ok(())
}

#[test]
fn test_save_and_reload() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let mut config = AppConfig::default();
    config.database_path = PathBuf::from("/var/lib/booknest/books.db");
    config.log_level = LogLevel::Debug;
    config.theme = ThemeChoice::Light;

    manager.save(&config)?;

    let reloaded = manager.load()?;
    assert_eq!(reloaded, config);

    Ok(())
}

#[test]
fn test_save_creates_parent_directories() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let nested_path = temp_dir.path().join("a").join("b").join("c");
    let manager = ConfigManager::with_directory(nested_path)?;

    manager.save(&AppConfig::default())?;

    assert!(manager.config_path().exists());

    Ok(())
}

#[test]
fn test_repeated_saves_keep_file_parsable() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let mut config = AppConfig::default();
    for level in [LogLevel::Error, LogLevel::Warn, LogLevel::Trace] {
        config.log_level = level;
        manager.save(&config)?;
        assert_eq!(manager.load()?.log_level, level);
    }

    Ok(())
}
