// src/config/mod.rs

//! Configuration handling for the build task.
//!
//! Responsibilities:
//! - Define the raw string map and its typed view (`model.rs`).
//! - Load a config file from disk for the CLI host (`loader.rs`).
//! - Validate fields before any execution is attempted (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, parse_config};
pub use model::{keys, ConfigMap, ConfigProperty, TaskConfig, CONFIG_SCHEMA, DEFAULT_TOOL_PATH};
pub use validate::{validate_config, ValidationError, ValidationResult};
