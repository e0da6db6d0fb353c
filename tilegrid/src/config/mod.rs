//! User configuration for tilegrid.
//!
//! Settings live in `~/.tilegrid/config.ini`. A missing file means defaults;
//! command-line flags override whatever the file says.
//!
//! ```ini
//! [grid]
//! zoom = 12
//!
//! [output]
//! format = text
//!
//! [logging]
//! level = warn
//! file =
//! ```

mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    ConfigFile, GridSettings, LoggingSettings, OutputFormat, OutputSettings, DEFAULT_LOG_LEVEL,
    DEFAULT_ZOOM,
};
