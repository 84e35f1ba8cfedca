// tests/logging.rs

use msbuild_task::cli::LogLevel;
use msbuild_task::logging::{filter_directive, DEFAULT_DIRECTIVE};

#[test]
fn test_cli_level_wins_over_env() {
    assert_eq!(filter_directive(Some(LogLevel::Debug), Some("error")), "debug");
    assert_eq!(filter_directive(Some(LogLevel::Warn), None), "warn");
}

#[test]
fn test_env_accepts_full_directives() {
    assert_eq!(filter_directive(None, Some(" trace ")), "trace");
    assert_eq!(
        filter_directive(None, Some("msbuild_task::exec=debug,warn")),
        "msbuild_task::exec=debug,warn"
    );
}

#[test]
fn test_blank_or_invalid_env_falls_back_to_info() {
    assert_eq!(filter_directive(None, None), DEFAULT_DIRECTIVE);
    assert_eq!(filter_directive(None, Some("   ")), DEFAULT_DIRECTIVE);
    assert_eq!(
        filter_directive(None, Some("msbuild_task=loud")),
        DEFAULT_DIRECTIVE
    );
    assert_eq!(DEFAULT_DIRECTIVE, "info");
}
