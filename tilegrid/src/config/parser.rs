//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.
//! The value parsers are shared with [`super::keys`] so `config set` and the
//! file loader accept exactly the same values.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::{ConfigFile, OutputFormat};
use crate::coord::MAX_ZOOM;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
/// Fails on the first invalid value.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let (config, errors) = parse_ini_lenient(ini);
    match errors.into_iter().next() {
        Some(e) => Err(e),
        None => Ok(config),
    }
}

/// Like [`parse_ini`], but keeps the default for each invalid value and
/// returns the rejected entries alongside the config.
pub(super) fn parse_ini_lenient(ini: &Ini) -> (ConfigFile, Vec<ConfigFileError>) {
    let mut config = ConfigFile::default();
    let mut errors = Vec::new();

    // [grid] section
    if let Some(section) = ini.section(Some("grid")) {
        if let Some(v) = section.get("zoom") {
            match parse_zoom(v) {
                Ok(zoom) => config.grid.zoom = zoom,
                Err(reason) => errors.push(invalid("grid", "zoom", v, reason)),
            }
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("format") {
            match v.parse::<OutputFormat>() {
                Ok(format) => config.output.format = format,
                Err(reason) => errors.push(invalid("output", "format", v, reason)),
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("level") {
            match parse_level(v) {
                Ok(level) => config.logging.level = level,
                Err(reason) => errors.push(invalid("logging", "level", v, reason)),
            }
        }
        if let Some(v) = section.get("file") {
            config.logging.file = parse_optional_path(v);
        }
    }

    (config, errors)
}

/// Zoom level between 0 and the finest supported level.
pub(super) fn parse_zoom(value: &str) -> Result<u8, String> {
    let reason = || format!("must be an integer between 0 and {}", MAX_ZOOM);
    let zoom: u8 = value.trim().parse().map_err(|_| reason())?;
    if zoom > MAX_ZOOM {
        return Err(reason());
    }
    Ok(zoom)
}

/// A log filter: either a bare level, or an `EnvFilter` directive list such
/// as `tilegrid=debug,warn` which is passed through untouched.
pub(super) fn parse_level(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    if value.contains('=') || value.contains(',') {
        return Ok(value.to_string());
    }

    let level = value.to_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(format!("must be one of: {}", LOG_LEVELS.join(", ")))
    }
}

/// Empty means unset.
pub(super) fn parse_optional_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(expand_tilde(value))
    }
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn invalid(section: &str, key: &str, value: &str, reason: String) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_LOG_LEVEL, DEFAULT_ZOOM};

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_is_default() {
        let config = parse("").unwrap();
        assert_eq!(config.grid.zoom, DEFAULT_ZOOM);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_all_sections() {
        let config = parse(
            "[grid]\nzoom = 5\n\n[output]\nformat = JSON\n\n[logging]\nlevel = Debug\nfile = /tmp/tilegrid.log\n",
        )
        .unwrap();

        assert_eq!(config.grid.zoom, 5);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/tilegrid.log"))
        );
    }

    #[test]
    fn test_bad_format_names_key() {
        let err = parse("[output]\nformat = xml\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue { section, key, .. } => {
                assert_eq!(section, "output");
                assert_eq!(key, "format");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_lenient_parse_keeps_valid_values() {
        let ini = Ini::load_from_str("[grid]\nzoom = 40\n\n[output]\nformat = json\n").unwrap();
        let (config, errors) = parse_ini_lenient(&ini);

        assert_eq!(config.grid.zoom, DEFAULT_ZOOM);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ConfigFileError::InvalidValue { key, value, .. } if key == "zoom" && value == "40"
        ));
    }

    #[test]
    fn test_parse_zoom_bounds() {
        assert_eq!(parse_zoom("0"), Ok(0));
        assert_eq!(parse_zoom(" 18 "), Ok(18));
        assert!(parse_zoom("19").is_err());
        assert!(parse_zoom("-1").is_err());
        assert!(parse_zoom("twelve").is_err());
    }

    #[test]
    fn test_parse_level_accepts_directives() {
        assert_eq!(parse_level("INFO"), Ok("info".to_string()));
        assert_eq!(
            parse_level("tilegrid=trace,warn"),
            Ok("tilegrid=trace,warn".to_string())
        );
        assert!(parse_level("loud").is_err());
        assert!(parse_level("  ").is_err());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/logs/tilegrid.log");
        if dirs::home_dir().is_some() {
            assert!(!expanded.starts_with("~"));
        }
        assert_eq!(expand_tilde("/var/log/x.log"), PathBuf::from("/var/log/x.log"));
    }
}
