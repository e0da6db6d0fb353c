//! Configuration file handling for ~/.tilegrid/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.tilegrid/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        let config = super::parser::parse_ini(&ini)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config file");
        Ok(config)
    }

    /// Load configuration, skipping values that fail validation.
    ///
    /// Invalid entries keep their defaults and are returned next to the
    /// config, so a broken file can still be inspected and repaired.
    pub fn load_lenient_from(path: &Path) -> Result<(Self, Vec<ConfigFileError>), ConfigFileError> {
        if !path.exists() {
            return Ok((Self::default(), Vec::new()));
        }

        let ini = Ini::load_from_file(path)?;
        let (config, rejected) = super::parser::parse_ini_lenient(&ini);
        if !rejected.is_empty() {
            tracing::debug!(path = %path.display(), count = rejected.len(), "Skipped invalid config values");
        }
        Ok((config, rejected))
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }
}

/// Get the path to the config directory (~/.tilegrid).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tilegrid")
}

/// Get the path to the config file (~/.tilegrid/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, DEFAULT_ZOOM};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&temp.path().join("absent.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.grid.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.grid.zoom = 7;
        config.output.format = OutputFormat::Json;
        config.logging.level = "tilegrid=debug".to_string();
        config.logging.file = Some(temp.path().join("tilegrid.log"));

        config.save_to(&path).unwrap();
        assert!(path.exists());

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_value_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[grid]\nzoom = 40\n").unwrap();

        let err = ConfigFile::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
        assert!(err.to_string().contains("grid.zoom"));
    }

    #[test]
    fn test_lenient_load_skips_invalid_value() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(&path, "[grid]\nzoom = 40\n\n[output]\nformat = json\n").unwrap();

        let (config, rejected) = ConfigFile::load_lenient_from(&path).unwrap();
        assert_eq!(config.grid.zoom, DEFAULT_ZOOM);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].to_string().contains("grid.zoom"));
    }

    #[test]
    fn test_config_path_under_home() {
        let path = config_file_path();
        assert!(path.ends_with(".tilegrid/config.ini"));
    }
}
