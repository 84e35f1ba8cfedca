// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod task;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cli::{CliArgs, CliCommand};
use crate::config::loader::default_config_path;
use crate::config::{load_from_path, ConfigMap, TaskConfig, ValidationResult};
use crate::console::{OutputSink, StdConsole};
use crate::errors::{Result, TaskError};
use crate::exec::build_command;
use crate::task::{ExecutionContext, MsBuildTask, Task};
use crate::types::ExecutionVerdict;

/// High-level entry point used by `main.rs`.
///
/// Plays the host's part for a single build step:
/// - config loading
/// - validation gate
/// - execution with an optional timeout
/// - verdict → error mapping for the exit code
pub async fn run(args: CliArgs) -> Result<()> {
    let task = MsBuildTask::new();

    match args.command {
        CliCommand::Schema => {
            print_schema(&task);
            Ok(())
        }
        CliCommand::Validate { config } => {
            let cfg = load_config(config)?;
            let result = task.validate(&cfg);
            report_validation(&result)?;
            println!("configuration is valid");
            Ok(())
        }
        CliCommand::Run {
            config,
            working_dir,
            timeout,
            dry_run,
        } => {
            let cfg = load_config(config)?;
            report_validation(&task.validate(&cfg))?;

            if dry_run {
                print_dry_run(&cfg, &working_dir);
                return Ok(());
            }

            let console: Arc<dyn OutputSink> = Arc::new(StdConsole);
            let ctx = ExecutionContext::new(working_dir, console);
            let verdict = execute_with_timeout(&task, &cfg, &ctx, timeout).await?;
            verdict_to_result(verdict)
        }
    }
}

/// Run `task` once, dropping it (and killing the child) if `timeout_secs`
/// elapses first.
pub async fn execute_with_timeout<T: Task>(
    task: &T,
    cfg: &ConfigMap,
    ctx: &ExecutionContext,
    timeout_secs: Option<u64>,
) -> Result<ExecutionVerdict> {
    let Some(secs) = timeout_secs else {
        return Ok(task.execute(cfg, ctx).await);
    };

    match tokio::time::timeout(Duration::from_secs(secs), task.execute(cfg, ctx)).await {
        Ok(verdict) => Ok(verdict),
        Err(_) => {
            warn!(timeout_secs = secs, "build timed out; process killed");
            Err(TaskError::Timeout(secs))
        }
    }
}

/// Map a verdict onto the CLI's error channel.
pub fn verdict_to_result(verdict: ExecutionVerdict) -> Result<()> {
    info!(verdict = %verdict, "build step finished");
    match verdict {
        ExecutionVerdict::Success { .. } => Ok(()),
        ExecutionVerdict::Failure { cause: Some(cause), .. } => Err(cause),
        ExecutionVerdict::Failure { message, cause: None } => Err(TaskError::BuildFailed(message)),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ConfigMap> {
    let path = path.unwrap_or_else(default_config_path);
    debug!(path = %path.display(), "loading task configuration");
    load_from_path(&path)
}

/// Print each validation error as `<field>: <message>` and fail if any.
fn report_validation(result: &ValidationResult) -> Result<()> {
    if result.is_valid() {
        return Ok(());
    }
    for err in result.errors() {
        eprintln!("{}: {}", err.field, err.message);
    }
    Err(TaskError::ValidationFailed(result.errors().len()))
}

fn print_schema<T: Task>(task: &T) {
    println!("{} task configuration:", task.display_value());
    for prop in task.config() {
        match prop.default_value {
            Some(default) => println!("  {} (default: {default})", prop.key),
            None => println!("  {}", prop.key),
        }
    }
}

/// Dry-run output: working directory and the exact command line.
fn print_dry_run(cfg: &ConfigMap, working_dir: &Path) {
    let command = build_command(&TaskConfig::from_map(cfg), working_dir);
    println!("msbuild-task dry-run");
    println!("  working_dir: {}", command.working_dir.display());
    println!("  command: {}", command.argv);
    debug!("dry-run complete (no execution)");
}
