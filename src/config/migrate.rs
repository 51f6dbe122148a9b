//! Configuration file upgrades: detect keys missing from an older
//! `rtimesheet.conf` and fill them with their defaults, preserving the
//! values already present.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const REQUIRED_KEYS: &[&str] = &["api_url", "database", "request_timeout_secs", "separator_char"];

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    let yaml: Value =
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(
            "configuration root must be a mapping".to_string(),
        )),
    }
}

/// Keys of [`REQUIRED_KEYS`] absent from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let map = parse_mapping(content)?;
    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add the missing keys to the file at `path`.
///
/// Returns the keys that were added; the file is rewritten only when the
/// list is not empty.
pub fn migrate_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut map = parse_mapping(&content)?;
    let defaults = match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => m,
        Ok(_) | Err(_) => {
            return Err(AppError::Config(
                "failed to serialize default configuration".to_string(),
            ));
        }
    };

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))
        .map_err(|e| AppError::Config(format!("Failed to serialize YAML for {:?}: {}", path, e)))?;
    fs::write(path, serialized)?;

    info(format!(
        "Config migration performed: added {}",
        missing.join(", ")
    ));
    Ok(missing)
}
