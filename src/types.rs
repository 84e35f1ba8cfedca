use std::fmt;

use crate::errors::TaskError;

/// Outcome of a single task execution, handed back to the host.
///
/// Launch errors, non-zero exits and waiting errors all collapse into
/// `Failure`; the host only needs to know whether the step passed and why.
#[derive(Debug)]
pub enum ExecutionVerdict {
    Success {
        message: String,
    },
    Failure {
        message: String,
        cause: Option<TaskError>,
    },
}

impl ExecutionVerdict {
    pub fn success(message: impl Into<String>) -> Self {
        ExecutionVerdict::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ExecutionVerdict::Failure {
            message: message.into(),
            cause: None,
        }
    }

    pub fn failure_with_cause(message: impl Into<String>, cause: TaskError) -> Self {
        ExecutionVerdict::Failure {
            message: message.into(),
            cause: Some(cause),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionVerdict::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ExecutionVerdict::Success { message } | ExecutionVerdict::Failure { message, .. } => {
                message
            }
        }
    }

    pub fn cause(&self) -> Option<&TaskError> {
        match self {
            ExecutionVerdict::Success { .. } => None,
            ExecutionVerdict::Failure { cause, .. } => cause.as_ref(),
        }
    }
}

impl fmt::Display for ExecutionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionVerdict::Success { message } => write!(f, "success: {message}"),
            ExecutionVerdict::Failure {
                message,
                cause: Some(cause),
            } => write!(f, "failure: {message} ({cause})"),
            ExecutionVerdict::Failure {
                message,
                cause: None,
            } => write!(f, "failure: {message}"),
        }
    }
}
