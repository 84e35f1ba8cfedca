// tests/config_loading.rs

use std::io::Write;
use tempfile::NamedTempFile;

use msbuild_task::config::{keys, load_from_path, parse_config, TaskConfig};
use msbuild_task::errors::TaskError;

#[test]
fn test_load_strings_and_booleans() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
SolutionFile = "Web.sln"
WorkingDirectory = "src"
NoLogo = true
FileLogger = false
SpecifyTargets = "true"
Targets = "Rebuild"
Properties = """
Configuration=Release
Platform=x64
"""
"#
    )
    .unwrap();

    let map = load_from_path(file.path()).unwrap();
    assert_eq!(map.get(keys::SOLUTION_FILE), "Web.sln");
    assert_eq!(map.get(keys::NO_LOGO), "true");
    assert_eq!(map.get(keys::FILE_LOGGER), "false");
    assert_eq!(map.get(keys::VERBOSITY), "");

    let cfg = TaskConfig::from_map(&map);
    assert!(cfg.no_logo);
    assert!(!cfg.file_logger);
    assert!(cfg.specify_targets);
    assert_eq!(cfg.properties, "Configuration=Release\nPlatform=x64\n");
}

#[test]
fn test_unknown_keys_are_kept_but_harmless() {
    let map = parse_config("SolutionFile = \"a.sln\"\nMSBuildPath = \"x\"\n").unwrap();
    assert_eq!(map.get("MSBuildPath"), "x");
    assert_eq!(map.len(), 2);
}

#[test]
fn test_non_string_values_are_rejected() {
    let result = parse_config("SolutionFile = 42\n");
    match result {
        Err(TaskError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_from_path(dir.path().join("MSBuildTask.toml"));
    assert!(matches!(result, Err(TaskError::IoError(_))));
}

#[test]
fn test_empty_file_gives_empty_map() {
    let map = parse_config("").unwrap();
    assert!(map.is_empty());
    assert_eq!(map.get(keys::SOLUTION_FILE), "");
}
