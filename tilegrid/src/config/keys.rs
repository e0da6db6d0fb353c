//! Configuration key access and validation.
//!
//! Type-safe getting and setting of configuration values by their
//! `section.key` name, used by the `config get/set/list` commands.

use std::str::FromStr;
use thiserror::Error;

use super::parser::{parse_level, parse_optional_path, parse_zoom};
use super::settings::{ConfigFile, OutputFormat};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    GridZoom,
    OutputFormat,
    LoggingLevel,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid.zoom" => Ok(ConfigKey::GridZoom),
            "output.format" => Ok(ConfigKey::OutputFormat),
            "logging.level" => Ok(ConfigKey::LoggingLevel),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "grid.zoom").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::GridZoom => "grid.zoom",
            ConfigKey::OutputFormat => "output.format",
            ConfigKey::LoggingLevel => "logging.level",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "grid").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "zoom").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::GridZoom => config.grid.zoom.to_string(),
            ConfigKey::OutputFormat => config.output.format.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Set a value on the config after validating it.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let failed = |reason: String| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        };

        match self {
            ConfigKey::GridZoom => config.grid.zoom = parse_zoom(value).map_err(failed)?,
            ConfigKey::OutputFormat => {
                config.output.format = value.parse::<OutputFormat>().map_err(failed)?
            }
            ConfigKey::LoggingLevel => config.logging.level = parse_level(value).map_err(failed)?,
            ConfigKey::LoggingFile => config.logging.file = parse_optional_path(value),
        }
        Ok(())
    }

    /// All keys, in the order `config list` shows them.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::GridZoom,
            ConfigKey::OutputFormat,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingFile,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_case_insensitive() {
        assert_eq!("grid.zoom".parse(), Ok(ConfigKey::GridZoom));
        assert_eq!("Output.Format".parse(), Ok(ConfigKey::OutputFormat));
        assert_eq!(
            "grid.size".parse::<ConfigKey>(),
            Err(ConfigKeyError::UnknownKey("grid.size".to_string()))
        );
    }

    #[test]
    fn test_names_roundtrip() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_section_and_key_name() {
        assert_eq!(ConfigKey::LoggingFile.section(), "logging");
        assert_eq!(ConfigKey::LoggingFile.key_name(), "file");
    }

    #[test]
    fn test_get_set() {
        let mut config = ConfigFile::default();

        ConfigKey::GridZoom.set(&mut config, "16").unwrap();
        ConfigKey::OutputFormat.set(&mut config, "json").unwrap();
        ConfigKey::LoggingLevel.set(&mut config, "debug").unwrap();
        ConfigKey::LoggingFile.set(&mut config, "/tmp/tg.log").unwrap();

        assert_eq!(ConfigKey::GridZoom.get(&config), "16");
        assert_eq!(ConfigKey::OutputFormat.get(&config), "json");
        assert_eq!(ConfigKey::LoggingLevel.get(&config), "debug");
        assert_eq!(ConfigKey::LoggingFile.get(&config), "/tmp/tg.log");

        ConfigKey::LoggingFile.set(&mut config, "").unwrap();
        assert_eq!(ConfigKey::LoggingFile.get(&config), "");
    }

    #[test]
    fn test_set_rejects_invalid_and_keeps_old_value() {
        let mut config = ConfigFile::default();
        let err = ConfigKey::GridZoom.set(&mut config, "99").unwrap_err();

        assert!(matches!(err, ConfigKeyError::ValidationFailed { ref key, .. } if key == "grid.zoom"));
        assert_eq!(config, ConfigFile::default());
    }
}
