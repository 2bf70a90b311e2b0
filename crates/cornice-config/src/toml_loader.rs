//! TOML config file loading and creation.

use crate::schema::CorniceConfig;
use crate::validation;
use cornice_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. If the parsed config fails
/// validation, a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<CorniceConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: CorniceConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(CorniceConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, creates a commented default config file and
/// returns defaults.
pub fn load_default() -> Result<CorniceConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(CorniceConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path
/// (`~/.config/cornice/config.toml` on Linux).
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("cornice").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Cornice panel configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[panel]
# orientation = 2        # 0=top 1=right 2=bottom 3=left
# size = 48              # panel size in px, 0-400
# offset = 0             # icon offset in px, 0-400
# applets = [
#   "/usr/share/cornice/applets/launcher.desktop::launcher-1",
#   "/usr/share/cornice/applets/clock.desktop::clock-1",
# ]

[gateway]
# enabled = true
# socket = ""            # empty = runtime-dir default
# required = false       # exit if the registration socket cannot bind

[logging]
# level = "info"         # debug, info, warn, error
"##
    .to_string()
}
