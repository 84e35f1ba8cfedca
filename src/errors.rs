// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for build process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("failed reading {stream} of build process: {source}")]
    StreamDrain {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration has {0} validation error(s)")]
    ValidationFailed(usize),

    #[error("Build failed: {0}")]
    BuildFailed(String),

    #[error("build did not finish within {0}s")]
    Timeout(u64),
}

pub type Result<T> = std::result::Result<T, TaskError>;
