//! INI serialization logic for converting `ConfigFile` → INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!(
        r#"[grid]
; Default zoom level (0-18) when a command is run without --zoom.
; Zoom z splits the world into 2^z x 2^z tiles.
zoom = {}

[output]
; Result format: text or json
format = {}

[logging]
; Log filter: trace, debug, info, warn, error, off, or a directive
; list such as tilegrid=debug,warn. RUST_LOG overrides this.
level = {}
; Optional log file (leave empty to log to stderr only)
file = {}
"#,
        config.grid.zoom,
        config.output.format.as_str(),
        config.logging.level,
        log_file,
    )
}
