//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, and `config path` commands
//! for viewing and modifying configuration settings from the command line.

use std::path::Path;

use clap::Subcommand;
use tilegrid::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., grid.zoom)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., grid.zoom)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand against `path`, or the default config file.
pub fn run(command: ConfigCommands, path: Option<&Path>) -> Result<(), CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);

    match command {
        ConfigCommands::Get { key } => println!("{}", get_value(&path, &key)?),
        ConfigCommands::Set { key, value } => {
            let name = set_value(&path, &key, &value)?;
            println!("Set {} = {}", name, value);
        }
        ConfigCommands::List => println!("{}", list(&path)?),
        ConfigCommands::Path => println!("{}", path.display()),
    }
    Ok(())
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'tilegrid config list' to see available keys.",
            key
        ))
    })
}

/// Load the config file without failing on invalid values.
///
/// Rejected entries are reported on stderr and replaced by their defaults,
/// so `config set` can repair a file the other commands refuse to load.
fn load_repairable(path: &Path) -> Result<ConfigFile, CliError> {
    let (config, rejected) = ConfigFile::load_lenient_from(path)?;
    for e in &rejected {
        eprintln!("Warning: {} (using default)", e);
    }
    Ok(config)
}

/// Get a configuration value.
fn get_value(path: &Path, key: &str) -> Result<String, CliError> {
    let config_key = parse_key(key)?;
    let config = load_repairable(path)?;
    let value = config_key.get(&config);

    if value.is_empty() {
        Ok("(not set)".to_string())
    } else {
        Ok(value)
    }
}

/// Set a configuration value and save the file. Returns the canonical key name.
fn set_value(path: &Path, key: &str, value: &str) -> Result<&'static str, CliError> {
    let config_key = parse_key(key)?;

    let mut config = load_repairable(path)?;
    config_key
        .set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save_to(path)?;

    tracing::info!(key = config_key.name(), value, path = %path.display(), "Saved setting");
    Ok(config_key.name())
}

/// List all configuration settings.
fn list(path: &Path) -> Result<String, CliError> {
    let config = load_repairable(path)?;

    let mut lines = vec![
        format!("Configuration Settings ({})", path.display()),
        "======================".to_string(),
    ];
    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        if section != current_section {
            lines.push(String::new());
            lines.push(format!("[{}]", section));
            current_section = section;
        }

        let value = key.get(&config);
        if value.is_empty() {
            lines.push(format!("  {} = (not set)", key.key_name()));
        } else {
            lines.push(format!("  {} = {}", key.key_name(), value));
        }
    }

    Ok(lines.join("\n"))
}
