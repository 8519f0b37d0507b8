//! Detect and fill configuration keys missing from an older config file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a current config file carries.
pub const KNOWN_FIELDS: &[&str] = &[
    "database",
    "chart_window",
    "note_preview",
    "show_emoji",
    "storage_slot",
];

/// Known keys absent from the YAML document `content`.
pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("cannot parse configuration: {}", e)))?;

    let missing = match yaml.as_mapping() {
        Some(map) => KNOWN_FIELDS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect(),
        None => KNOWN_FIELDS.to_vec(),
    };
    Ok(missing)
}

/// Rewrite the file at `path` with defaults for every missing key.
/// Returns the keys that were added; the file is untouched when none are.
pub fn migrate_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let missing = missing_fields(&content)?;

    if !missing.is_empty() {
        let cfg = Config::parse(&content)?;
        cfg.save_to(path)?;
    }
    Ok(missing)
}
