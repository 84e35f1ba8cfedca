// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The task facade talks to an `ExecutorBackend` instead of spawning
//! processes directly. Production code uses [`ProcessRunner`]; tests can
//! provide their own backend that records commands and returns a scripted
//! verdict without touching the OS.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;

use crate::console::OutputSink;
use crate::exec::command::CommandVector;
use crate::exec::task_runner::run_process;
use crate::types::ExecutionVerdict;

/// Trait abstracting how a built command is executed.
pub trait ExecutorBackend: Send + Sync {
    /// Run `argv` from `working_dir`, streaming output into `sink`.
    fn run<'a>(
        &'a self,
        argv: &'a CommandVector,
        working_dir: &'a Path,
        sink: Arc<dyn OutputSink>,
    ) -> Pin<Box<dyn Future<Output = ExecutionVerdict> + Send + 'a>>;
}

/// Real backend: spawns the build tool as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for ProcessRunner {
    fn run<'a>(
        &'a self,
        argv: &'a CommandVector,
        working_dir: &'a Path,
        sink: Arc<dyn OutputSink>,
    ) -> Pin<Box<dyn Future<Output = ExecutionVerdict> + Send + 'a>> {
        Box::pin(run_process(argv, working_dir, sink))
    }
}
