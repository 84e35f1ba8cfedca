// src/task.rs

//! Host-facing task facade.
//!
//! The host discovers the task through the [`Task`] trait: it reads the
//! config schema, validates user input, and only then asks for execution.
//! `execute` does not validate again.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use tracing::info;

use crate::config::{validate_config, ConfigMap, ConfigProperty, TaskConfig, ValidationResult, CONFIG_SCHEMA};
use crate::console::OutputSink;
use crate::exec::{build_command, ExecutorBackend, ProcessRunner};
use crate::types::ExecutionVerdict;

const BANNER_WIDTH: usize = 79;
const BANNER_TITLE: &str = "Starting MS Build Task";

/// Everything the host provides for a single execution.
#[derive(Clone)]
pub struct ExecutionContext {
    pub working_dir: PathBuf,
    pub console: Arc<dyn OutputSink>,
}

impl ExecutionContext {
    pub fn new(working_dir: impl Into<PathBuf>, console: Arc<dyn OutputSink>) -> Self {
        Self {
            working_dir: working_dir.into(),
            console,
        }
    }
}

/// Interface a build-step plugin exposes to its host.
pub trait Task: Send + Sync {
    /// Keys the task accepts, with their defaults.
    fn config(&self) -> &'static [ConfigProperty];

    /// Field-level checks; the host gates execution on an empty result.
    fn validate(&self, config: &ConfigMap) -> ValidationResult;

    /// Human-readable name shown by the host.
    fn display_value(&self) -> &str;

    /// Run the task once and report the outcome.
    fn execute<'a>(
        &'a self,
        config: &'a ConfigMap,
        ctx: &'a ExecutionContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionVerdict> + Send + 'a>>;
}

/// The MSBuild task.
#[derive(Debug, Clone, Default)]
pub struct MsBuildTask<B = ProcessRunner> {
    backend: B,
}

impl MsBuildTask<ProcessRunner> {
    pub fn new() -> Self {
        Self {
            backend: ProcessRunner::new(),
        }
    }
}

impl<B: ExecutorBackend> MsBuildTask<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ExecutorBackend> Task for MsBuildTask<B> {
    fn config(&self) -> &'static [ConfigProperty] {
        CONFIG_SCHEMA
    }

    fn validate(&self, config: &ConfigMap) -> ValidationResult {
        validate_config(&TaskConfig::from_map(config))
    }

    fn display_value(&self) -> &str {
        "MSBuild"
    }

    fn execute<'a>(
        &'a self,
        config: &'a ConfigMap,
        ctx: &'a ExecutionContext,
    ) -> Pin<Box<dyn Future<Output = ExecutionVerdict> + Send + 'a>> {
        Box::pin(async move {
            let command = build_command(&TaskConfig::from_map(config), &ctx.working_dir);

            for line in banner() {
                ctx.console.print_line(&line);
            }
            ctx.console
                .print_line(&format!("Launching command: {}", command.argv));
            info!(
                cmd = %command.argv,
                working_dir = %command.working_dir.display(),
                "launching build"
            );

            self.backend
                .run(&command.argv, &command.working_dir, ctx.console.clone())
                .await
        })
    }
}

/// Framed title printed before the command line.
pub fn banner() -> [String; 3] {
    let rule = "-".repeat(BANNER_WIDTH);
    let title = format!("|{:^width$}|", BANNER_TITLE, width = BANNER_WIDTH - 2);
    [rule.clone(), title, rule]
}
