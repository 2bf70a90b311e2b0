//! Configuration schema types for the cornice panel.
//!
//! All sections use `serde(default)` so partial configs work. The applet list
//! is carried as raw descriptor strings: a malformed entry is a per-entry,
//! reconcile-time condition, not a config error.

use cornice_common::Orientation;
use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorniceConfig {
    pub panel: PanelSection,
    pub gateway: GatewaySection,
    pub logging: LoggingSection,
}

/// The four properties bound into the applet manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSection {
    /// Screen edge as a wire index: 0=top, 1=right, 2=bottom, 3=left.
    pub orientation: Orientation,
    /// Panel size in pixels (valid range: 0-400).
    pub size: u32,
    /// Icon offset in pixels (valid range: 0-400).
    pub offset: u32,
    /// Ordered applet descriptors, `"<source-path>::<uid>"`.
    pub applets: Vec<String>,
}

impl Default for PanelSection {
    fn default() -> Self {
        Self {
            orientation: Orientation::Bottom,
            size: 48,
            offset: 0,
            applets: Vec::new(),
        }
    }
}

/// External registration socket settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySection {
    pub enabled: bool,
    /// Socket path; empty selects the runtime-dir default.
    pub socket: String,
    /// If true, a bind failure is fatal for the whole process instead of
    /// only disabling external registration.
    pub required: bool,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            enabled: true,
            socket: String::new(),
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// One of debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_panel_defaults() {
        let config = CorniceConfig::default();
        assert_eq!(config.panel.orientation, Orientation::Bottom);
        assert_eq!(config.panel.size, 48);
        assert_eq!(config.panel.offset, 0);
        assert!(config.panel.applets.is_empty());
        assert!(config.gateway.enabled);
        assert!(!config.gateway.required);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let config: CorniceConfig = toml::from_str(
            r#"
[panel]
size = 64
"#,
        )
        .unwrap();
        assert_eq!(config.panel.size, 64);
        assert_eq!(config.panel.orientation, Orientation::Bottom);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn orientation_parses_from_wire_index() {
        let config: CorniceConfig = toml::from_str(
            r#"
[panel]
orientation = 3
"#,
        )
        .unwrap();
        assert_eq!(config.panel.orientation, Orientation::Left);
    }

    #[test]
    fn out_of_range_orientation_is_a_parse_error() {
        let result: Result<CorniceConfig, _> = toml::from_str(
            r#"
[panel]
orientation = 9
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn applet_list_preserves_order() {
        let config: CorniceConfig = toml::from_str(
            r#"
[panel]
applets = ["a::1", "b::2", "c::3"]
"#,
        )
        .unwrap();
        assert_eq!(config.panel.applets, vec!["a::1", "b::2", "c::3"]);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = CorniceConfig::default();
        config.panel.applets.push("a::1".into());
        config.panel.orientation = Orientation::Top;

        let text = toml::to_string(&config).unwrap();
        let parsed: CorniceConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
