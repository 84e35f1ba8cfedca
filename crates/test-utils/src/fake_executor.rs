use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use msbuild_task::console::OutputSink;
use msbuild_task::exec::{CommandVector, ExecutorBackend};
use msbuild_task::types::ExecutionVerdict;
use tracing::debug;

/// One recorded call to [`FakeExecutor::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub argv: Vec<String>,
    pub working_dir: PathBuf,
}

/// A fake executor that:
/// - records every command it was asked to run
/// - writes the scripted output lines to the sink
/// - reports success, or `build failure` when configured to fail.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    runs: Arc<Mutex<Vec<RecordedRun>>>,
    stdout: Vec<String>,
    fail: bool,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_stdout(mut self, line: &str) -> Self {
        self.stdout.push(line.to_string());
        self
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }
}

impl ExecutorBackend for FakeExecutor {
    fn run<'a>(
        &'a self,
        argv: &'a CommandVector,
        working_dir: &'a Path,
        sink: Arc<dyn OutputSink>,
    ) -> Pin<Box<dyn Future<Output = ExecutionVerdict> + Send + 'a>> {
        Box::pin(async move {
            debug!(cmd = %argv, "fake executor run");
            self.runs.lock().unwrap().push(RecordedRun {
                argv: argv.as_slice().to_vec(),
                working_dir: working_dir.to_path_buf(),
            });

            for line in &self.stdout {
                sink.stdout_line(line);
            }

            if self.fail {
                ExecutionVerdict::failure("build failure")
            } else {
                ExecutionVerdict::success("build success")
            }
        })
    }
}
