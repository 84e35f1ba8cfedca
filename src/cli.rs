// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `msbuild-task`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "msbuild-task",
    version,
    about = "Validate a build task configuration and run MSBuild with it.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MSBUILD_TASK_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the configuration keys and their defaults.
    Schema,

    /// Check a configuration file and report field errors.
    Validate {
        /// Path to the task configuration (TOML).
        ///
        /// Default: `MSBuildTask.toml` in the current working directory.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Validate, then run the build.
    Run {
        /// Path to the task configuration (TOML).
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Directory the build tool runs in.
        #[arg(long, value_name = "DIR", default_value = ".")]
        working_dir: PathBuf,

        /// Kill the build if it runs longer than this many seconds.
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Validate and print the command line, but don't execute it.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive this level stands for.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
