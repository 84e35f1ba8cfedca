// src/exec/command.rs

//! Command-line construction for the build tool.
//!
//! The argument order is fixed:
//!
//! ```text
//! <tool> /property:* /verbosity:* [/targets:*] [/fileLogger] [/detailedsummary]
//!        [/nologo] [/noautoResponse] <additional parameters> <project file>
//! ```
//!
//! The project file comes last because the tool treats the first non-switch
//! token as the project.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::config::model::{is_blank, non_blank_lines, strip_whitespace, TaskConfig};

/// Ordered argv: tool path first, project file last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector(Vec<String>);

impl CommandVector {
    pub fn new(argv: Vec<String>) -> Self {
        Self(argv)
    }

    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-joined form used for logging.
    pub fn display(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for CommandVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// A command ready to hand to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub argv: CommandVector,
    /// Directory the child process runs in.
    pub working_dir: PathBuf,
}

/// Build the tool invocation for `cfg`, to be run from `working_dir`.
///
/// Pure and deterministic. Expects a configuration that passed
/// [`crate::config::validate_config`]; for anything else it still returns a
/// command, but the tool will probably reject it.
pub fn build_command(cfg: &TaskConfig, working_dir: impl AsRef<Path>) -> BuildCommand {
    let mut argv = vec![cfg.effective_tool_path().to_string()];

    push_tool_arguments(cfg, &mut argv);
    push_additional_parameters(cfg, &mut argv);
    argv.push(project_file_argument(cfg));

    BuildCommand {
        argv: CommandVector::new(argv),
        working_dir: working_dir.as_ref().to_path_buf(),
    }
}

fn push_tool_arguments(cfg: &TaskConfig, argv: &mut Vec<String>) {
    for prop in non_blank_lines(&cfg.properties) {
        argv.push(format!("/property:{}", strip_whitespace(prop)));
    }

    argv.push(format!("/verbosity:{}", cfg.effective_verbosity()));

    if cfg.specify_targets {
        let targets = strip_whitespace(&cfg.targets);
        if !targets.is_empty() {
            argv.push(format!("/targets:{targets}"));
        }
    }

    let switches = [
        (cfg.file_logger, "/fileLogger"),
        (cfg.detailed_summary, "/detailedsummary"),
        (cfg.no_logo, "/nologo"),
        (cfg.no_auto_response, "/noautoResponse"),
    ];
    argv.extend(
        switches
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, switch)| switch.to_string()),
    );
}

fn push_additional_parameters(cfg: &TaskConfig, argv: &mut Vec<String>) {
    if is_blank(&cfg.additional_parameters) {
        return;
    }
    argv.extend(non_blank_lines(&cfg.additional_parameters).map(strip_whitespace));
}

/// `WorkingDirectory` joined with `SolutionFile`.
fn project_file_argument(cfg: &TaskConfig) -> String {
    let joined = Path::new(cfg.effective_working_directory()).join(cfg.solution_file.trim());
    normalize(&joined).to_string_lossy().into_owned()
}

/// Drop `.` components and duplicate separators. `..` is left for the tool
/// to resolve.
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
