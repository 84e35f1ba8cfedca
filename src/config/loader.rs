// src/config/loader.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::model::{is_known_key, ConfigMap};
use crate::errors::Result;

/// A single value in the TOML file. Booleans are accepted for convenience
/// and turned into the `"true"` / `"false"` strings the task understands.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Flag(bool),
}

impl RawValue {
    fn into_string(self) -> String {
        match self {
            RawValue::Text(s) => s,
            RawValue::Flag(b) => b.to_string(),
        }
    }
}

/// Top-level keys of the TOML file, as written.
pub type RawConfigFile = BTreeMap<String, RawValue>;

/// Parse TOML text into a [`ConfigMap`].
///
/// Unknown keys are kept and reported at `warn`; they never affect the
/// command line.
pub fn parse_config(contents: &str) -> Result<ConfigMap> {
    let raw: RawConfigFile = toml::from_str(contents)?;

    for key in raw.keys().filter(|k| !is_known_key(k)) {
        warn!(key = %key, "ignoring unknown configuration key");
    }

    let map: ConfigMap = raw
        .into_iter()
        .map(|(k, v)| (k, v.into_string()))
        .collect();
    debug!(keys = map.len(), "parsed task configuration");
    Ok(map)
}

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; semantic checks are done by
/// [`crate::config::validate_config`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigMap> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Helper to resolve a default config path.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("MSBuildTask.toml")
}
