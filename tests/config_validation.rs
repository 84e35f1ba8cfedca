// tests/config_validation.rs

use msbuild_task::config::validate::properties_valid;
use msbuild_task::config::{keys, validate_config};
use msbuild_task_test_utils::builders::ConfigMapBuilder;

#[test]
fn test_minimal_config_is_valid() {
    let cfg = ConfigMapBuilder::new().build_task_config();
    let result = validate_config(&cfg);
    assert!(result.is_valid(), "unexpected errors: {:?}", result.errors());
}

#[test]
fn test_missing_solution_file_is_reported() {
    let cfg = ConfigMapBuilder::empty().build_task_config();
    let result = validate_config(&cfg);

    assert_eq!(result.errors().len(), 1);
    let err = result.error_for(keys::SOLUTION_FILE).expect("SolutionFile error");
    assert_eq!(err.message, "a solution/project file must be specified");
}

#[test]
fn test_blank_solution_file_is_reported() {
    let cfg = ConfigMapBuilder::new().solution_file("   ").build_task_config();
    assert!(validate_config(&cfg).error_for(keys::SOLUTION_FILE).is_some());
}

#[test]
fn test_custom_tool_path_requires_tool_path() {
    let cfg = ConfigMapBuilder::new().custom_tool_path("").build_task_config();
    let result = validate_config(&cfg);

    let err = result.error_for(keys::TOOL_PATH).expect("ToolPath error");
    assert_eq!(err.message, "path must be specified");
}

#[test]
fn test_tool_path_ignored_when_not_customized() {
    let cfg = ConfigMapBuilder::new()
        .set(keys::CUSTOMIZE_TOOL_PATH, "false")
        .set(keys::TOOL_PATH, "")
        .build_task_config();
    assert!(validate_config(&cfg).is_valid());
}

#[test]
fn test_only_exact_true_enables_custom_tool_path() {
    for value in ["TRUE", "True", " true", "yes", "1"] {
        let cfg = ConfigMapBuilder::new()
            .set(keys::CUSTOMIZE_TOOL_PATH, value)
            .build_task_config();
        assert!(
            validate_config(&cfg).error_for(keys::TOOL_PATH).is_none(),
            "{value:?} must not count as enabled"
        );
    }
}

#[test]
fn test_well_formed_properties_are_valid() {
    let cfg = ConfigMapBuilder::new()
        .properties("Configuration=Release\r\nPlatform = AnyCPU\n\n  Warn_Level=4  ")
        .build_task_config();
    assert!(validate_config(&cfg).is_valid());
}

#[test]
fn test_malformed_properties_yield_single_error() {
    let cfg = ConfigMapBuilder::new()
        .properties("foo bar\nbaz\nqux=\n=x")
        .build_task_config();
    let result = validate_config(&cfg);

    let property_errors: Vec<_> = result
        .errors()
        .iter()
        .filter(|e| e.field == keys::PROPERTIES)
        .collect();
    assert_eq!(property_errors.len(), 1);
    assert_eq!(
        property_errors[0].message,
        "must be one property per line formatted name=value"
    );
}

#[test]
fn test_properties_line_rules() {
    assert!(properties_valid("foo = bar"));
    assert!(properties_valid("a=b\n   \nc=d"));
    assert!(!properties_valid("foo bar"));
    assert!(!properties_valid("a=b=c"));
    assert!(!properties_valid("path=bin/Release"));
    assert!(!properties_valid("naïve=1"));
}

#[test]
fn test_only_ascii_whitespace_is_ignored_in_properties() {
    assert!(properties_valid("foo\t=\x0Bbar\x0C"));
    assert!(!properties_valid("foo\u{00A0}=bar"));
    assert!(!properties_valid("foo=\u{2003}bar"));
}

#[test]
fn test_specify_targets_requires_targets() {
    let cfg = ConfigMapBuilder::new().targets("  ").build_task_config();
    let result = validate_config(&cfg);

    let err = result.error_for(keys::TARGETS).expect("Targets error");
    assert_eq!(
        err.message,
        "Targets cannot be empty when SpecifyTargets is enabled"
    );
}

#[test]
fn test_targets_not_required_without_specify_targets() {
    let cfg = ConfigMapBuilder::new()
        .set(keys::SPECIFY_TARGETS, "false")
        .build_task_config();
    assert!(validate_config(&cfg).is_valid());
}

#[test]
fn test_errors_are_reported_in_rule_order() {
    let cfg = ConfigMapBuilder::empty()
        .custom_tool_path("")
        .properties("not a property")
        .targets("")
        .build_task_config();
    let fields: Vec<_> = validate_config(&cfg)
        .errors()
        .iter()
        .map(|e| e.field.clone())
        .collect();

    assert_eq!(
        fields,
        vec![
            keys::TOOL_PATH,
            keys::SOLUTION_FILE,
            keys::PROPERTIES,
            keys::TARGETS
        ]
    );
}
