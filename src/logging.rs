// src/logging.rs

//! Logging setup for `msbuild-task`.
//!
//! Logs go to STDERR; the build tool's own output is streamed to STDOUT.
//! The filter is chosen from, in order:
//! 1. the `--log-level` CLI flag;
//! 2. `MSBUILD_TASK_LOG`, which takes any `EnvFilter` directive
//!    (`debug`, `msbuild_task::exec=trace,warn`, ...);
//! 3. `info`.

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "MSBUILD_TASK_LOG";
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(cli_level, env_value.as_deref());

    fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    if cli_level.is_none() {
        let ignored = env_value.filter(|raw| !raw.trim().is_empty() && raw.trim() != directive);
        if let Some(raw) = ignored {
            warn!(
                env = LOG_ENV_VAR,
                value = %raw,
                fallback = %directive,
                "ignoring unusable log filter"
            );
        }
    }

    Ok(())
}

/// Pick the filter directive. A blank or unparsable env value falls back to
/// [`DEFAULT_DIRECTIVE`].
pub fn filter_directive(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(level) = cli_level {
        return level.as_directive().to_string();
    }

    match env_value.map(str::trim) {
        Some(raw) if !raw.is_empty() && EnvFilter::try_new(raw).is_ok() => raw.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// [`filter_directive`] compiled into an `EnvFilter`.
pub fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    EnvFilter::new(filter_directive(cli_level, env_value))
}
