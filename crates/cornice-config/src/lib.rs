//! Cornice configuration system.
//!
//! TOML-based configuration with live reload and full validation. All
//! sections use sensible defaults so partial configs work out of the box.
//! This crate is the binding layer that supplies the panel's four bound
//! properties (orientation, size, offset, applet list) wholesale on every
//! change; it never diffs the applet list itself.

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{CorniceConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::default_config_path;
pub use watcher::ConfigWatcher;

use cornice_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default if
/// none exists, and validates the result.
pub fn load_config() -> Result<CorniceConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = CorniceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CorniceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
