// src/console.rs

//! Output sink the build process streams into.
//!
//! The host owns transport and buffering; the task only needs something
//! that accepts lines on two channels plus its own diagnostic lines.

use std::io::Write;

/// Line-oriented sink for a running task.
///
/// Implementations must be callable from the two drain tasks at once.
pub trait OutputSink: Send + Sync {
    /// A line authored by the task itself (banner, command line, errors).
    fn print_line(&self, line: &str);

    /// A line read from the child's standard output.
    fn stdout_line(&self, line: &str);

    /// A line read from the child's standard error.
    fn stderr_line(&self, line: &str);
}

/// Sink writing to this process's stdout / stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl OutputSink for StdConsole {
    fn print_line(&self, line: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }

    fn stdout_line(&self, line: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }

    fn stderr_line(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }
}
