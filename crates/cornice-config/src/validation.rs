//! Configuration validation.
//!
//! Collects every range error into one `ValidationError` instead of stopping
//! at the first. Applet descriptor strings are not checked here: a malformed
//! entry is handled (and skipped) during reconciliation.

use crate::schema::CorniceConfig;
use cornice_common::ConfigError;

const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CorniceConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "panel.size", config.panel.size, 0, 400);
    validate_range(&mut errors, "panel.offset", config.panel.offset, 0, 400);

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level must be one of {LOG_LEVELS:?}, got '{}'",
            config.logging.level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{field} must be in range {min}-{max}, got {value}"));
    }
}
