#![allow(dead_code)]

use msbuild_task::config::{keys, ConfigMap, TaskConfig};

/// Builder for `ConfigMap` to simplify test setup.
///
/// Starts from a minimal valid configuration (`SolutionFile = app.sln`).
pub struct ConfigMapBuilder {
    map: ConfigMap,
}

impl ConfigMapBuilder {
    pub fn new() -> Self {
        let mut map = ConfigMap::new();
        map.insert(keys::SOLUTION_FILE, "app.sln");
        Self { map }
    }

    /// Start from nothing at all, not even a solution file.
    pub fn empty() -> Self {
        Self {
            map: ConfigMap::new(),
        }
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.map.insert(key, value);
        self
    }

    pub fn solution_file(self, path: &str) -> Self {
        self.set(keys::SOLUTION_FILE, path)
    }

    pub fn working_directory(self, dir: &str) -> Self {
        self.set(keys::WORKING_DIRECTORY, dir)
    }

    pub fn custom_tool_path(self, path: &str) -> Self {
        self.set(keys::CUSTOMIZE_TOOL_PATH, "true")
            .set(keys::TOOL_PATH, path)
    }

    pub fn properties(self, text: &str) -> Self {
        self.set(keys::PROPERTIES, text)
    }

    pub fn verbosity(self, level: &str) -> Self {
        self.set(keys::VERBOSITY, level)
    }

    pub fn targets(self, targets: &str) -> Self {
        self.set(keys::SPECIFY_TARGETS, "true")
            .set(keys::TARGETS, targets)
    }

    pub fn flag(self, key: &str, on: bool) -> Self {
        self.set(key, if on { "true" } else { "false" })
    }

    pub fn additional_parameters(self, text: &str) -> Self {
        self.set(keys::ADDITIONAL_PARAMETERS, text)
    }

    pub fn build(self) -> ConfigMap {
        self.map
    }

    pub fn build_task_config(self) -> TaskConfig {
        TaskConfig::from_map(&self.map)
    }
}

impl Default for ConfigMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
