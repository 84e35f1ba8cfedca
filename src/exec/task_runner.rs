// src/exec/task_runner.rs

//! Build process runner.

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::console::OutputSink;
use crate::errors::TaskError;
use crate::exec::command::CommandVector;
use crate::types::ExecutionVerdict;

pub const SUCCESS_MESSAGE: &str = "build success";
pub const FAILURE_MESSAGE: &str = "build failure";
pub const LAUNCH_FAILURE_MESSAGE: &str = "failed while running the build task";

/// How long the drains may keep reading once the child has exited. Pipes
/// inherited by grandchildren (e.g. MSBuild node-reuse workers) would
/// otherwise keep them open indefinitely.
pub const DRAIN_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Which pipe a drain task reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn name(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

/// Run `argv` in `working_dir`, streaming output into `sink`, and map the
/// exit status to a verdict.
///
/// - stdout and stderr are drained by two independent tasks so a full pipe on
///   one side never stalls the child.
/// - Both drains are joined before returning, so every line has reached the
///   sink by the time the verdict is available. A drain whose pipe is still
///   held open by a grandchild is abandoned after [`DRAIN_GRACE_PERIOD`].
/// - The child is spawned with `kill_on_drop(true)`: if the caller drops this
///   future (e.g. a host timeout), the process is killed and reaped.
/// - Read errors on either pipe are reported to the sink but never change the
///   verdict; only the exit status does.
pub async fn run_process(
    argv: &CommandVector,
    working_dir: &Path,
    sink: Arc<dyn OutputSink>,
) -> ExecutionVerdict {
    match run_process_inner(argv, working_dir, sink.clone()).await {
        Ok(verdict) => verdict,
        Err(err) => {
            error!(
                cmd = %argv,
                working_dir = %working_dir.display(),
                error = %err,
                "build task execution error"
            );
            sink.print_line(&err.to_string());
            ExecutionVerdict::failure_with_cause(LAUNCH_FAILURE_MESSAGE, err)
        }
    }
}

async fn run_process_inner(
    argv: &CommandVector,
    working_dir: &Path,
    sink: Arc<dyn OutputSink>,
) -> Result<ExecutionVerdict, TaskError> {
    let program = argv.program().ok_or_else(|| TaskError::Launch {
        program: String::new(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
    })?;

    info!(
        cmd = %argv,
        working_dir = %working_dir.display(),
        "starting build process"
    );

    let mut cmd = Command::new(program);
    cmd.args(argv.args())
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| TaskError::Launch {
        program: program.to_string(),
        source,
    })?;

    let stdout_drain = child
        .stdout
        .take()
        .map(|pipe| spawn_drain(pipe, Stream::Stdout, sink.clone()));
    let stderr_drain = child
        .stderr
        .take()
        .map(|pipe| spawn_drain(pipe, Stream::Stderr, sink.clone()));

    // On error the child is still owned here and is killed on drop.
    let status = child.wait().await.map_err(TaskError::Wait)?;

    let deadline = Instant::now() + DRAIN_GRACE_PERIOD;
    for drain in [stdout_drain, stderr_drain].into_iter().flatten() {
        join_drain(drain, deadline).await;
    }

    let code = status.code();
    info!(
        exit_code = ?code,
        success = status.success(),
        "build process exited"
    );

    if status.success() {
        Ok(ExecutionVerdict::success(SUCCESS_MESSAGE))
    } else {
        Ok(ExecutionVerdict::failure(FAILURE_MESSAGE))
    }
}

/// Wait for a drain task, giving up at `deadline`.
async fn join_drain(mut drain: JoinHandle<()>, deadline: Instant) {
    match tokio::time::timeout_at(deadline, &mut drain).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "output drain task did not complete"),
        Err(_) => {
            drain.abort();
            warn!(
                grace_ms = DRAIN_GRACE_PERIOD.as_millis() as u64,
                "output pipe still open after build process exited; abandoning drain"
            );
        }
    }
}

/// Forward every line of `pipe` to the matching sink channel until EOF.
///
/// Lines are split on raw bytes and decoded lossily, so non-UTF-8 output
/// (legacy code pages) is delivered rather than treated as an error. On a
/// genuine read error the error is reported once and the rest of the pipe
/// is read and discarded, keeping the read end open until EOF.
fn spawn_drain<R>(pipe: R, stream: Stream, sink: Arc<dyn OutputSink>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(pipe);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    let line = decode_line(&buf);
                    match stream {
                        Stream::Stdout => sink.stdout_line(&line),
                        Stream::Stderr => sink.stderr_line(&line),
                    }
                }
                Err(source) => {
                    let err = TaskError::StreamDrain {
                        stream: stream.name(),
                        source,
                    };
                    warn!(error = %err, "stream drain failed; verdict left to exit status");
                    sink.print_line(&err.to_string());

                    if let Err(e) = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await {
                        debug!(stream = stream.name(), error = %e, "discarding remaining output failed");
                    }
                    break;
                }
            }
        }

        debug!(stream = stream.name(), "output drain ended");
    })
}

/// Strip a trailing `\n` or `\r\n` and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
