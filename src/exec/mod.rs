// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] turns a [`crate::config::TaskConfig`] into the tool's
//!   argument vector.
//! - [`task_runner`] spawns that command with `tokio::process::Command`,
//!   drains its output and maps the exit status to a verdict.
//! - [`backend`] provides the `ExecutorBackend` trait and the production
//!   `ProcessRunner`, which tests can replace with a fake implementation.

pub mod backend;
pub mod command;
pub mod task_runner;

pub use backend::{ExecutorBackend, ProcessRunner};
pub use command::{build_command, BuildCommand, CommandVector};
pub use task_runner::run_process;
