//! Common types and utilities shared across CLI commands.

use std::path::Path;

use clap::ValueEnum;
use tilegrid::config::{ConfigFile, OutputFormat};
use tilegrid::coord::MAX_ZOOM;

use crate::error::CliError;

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum FormatArg {
    /// One human-readable line per region
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Settings resolved from CLI flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    pub zoom: u8,
    pub format: OutputFormat,
}

impl Context {
    /// CLI takes precedence, then config.
    pub fn resolve(
        cli_zoom: Option<u8>,
        cli_format: Option<FormatArg>,
        config: &ConfigFile,
    ) -> Result<Self, CliError> {
        Ok(Self {
            zoom: resolve_zoom(cli_zoom, config)?,
            format: cli_format
                .map(OutputFormat::from)
                .unwrap_or(config.output.format),
        })
    }
}

/// Resolve zoom level from CLI args and config.
pub fn resolve_zoom(cli_zoom: Option<u8>, config: &ConfigFile) -> Result<u8, CliError> {
    let zoom = cli_zoom.unwrap_or(config.grid.zoom);
    if zoom > MAX_ZOOM {
        return Err(CliError::Config(format!(
            "zoom {} is out of range (0-{})",
            zoom, MAX_ZOOM
        )));
    }
    Ok(zoom)
}

/// Load the config file given with `--config`, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}
