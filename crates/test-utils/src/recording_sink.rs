use std::sync::Mutex;

use msbuild_task::console::OutputSink;

/// Which sink method received a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Task,
    Stdout,
    Stderr,
}

/// Sink that keeps every line, in arrival order, for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn lines_on(&self, channel: Channel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, l)| l)
            .collect()
    }

    fn push(&self, channel: Channel, line: &str) {
        self.lines.lock().unwrap().push((channel, line.to_string()));
    }
}

impl OutputSink for RecordingSink {
    fn print_line(&self, line: &str) {
        self.push(Channel::Task, line);
    }

    fn stdout_line(&self, line: &str) {
        self.push(Channel::Stdout, line);
    }

    fn stderr_line(&self, line: &str) {
        self.push(Channel::Stderr, line);
    }
}
