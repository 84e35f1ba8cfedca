// tests/command_builder_props.rs

use proptest::prelude::*;

use msbuild_task::config::{keys, TaskConfig, DEFAULT_TOOL_PATH};
use msbuild_task::exec::build_command;
use msbuild_task_test_utils::builders::ConfigMapBuilder;

fn flag_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        Just(String::new()),
        "[a-zA-Z ]{0,6}",
    ]
}

fn property_lines() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z_]{1,8} ?= ?[A-Za-z0-9]{1,8}", 0..5)
        .prop_map(|lines| lines.join("\n"))
}

// Arbitrary, validation-passing configurations.
fn config_strategy() -> impl Strategy<Value = TaskConfig> {
    (
        (flag_value(), "[a-z/]{1,12}", "[a-z.]{0,6}"),
        property_lines(),
        prop_oneof![Just(String::new()), Just("quiet".to_string()), Just("detailed".to_string())],
        (flag_value(), "[A-Za-z;,]{1,12}"),
        (flag_value(), flag_value(), flag_value(), flag_value()),
        proptest::collection::vec("/[a-z:]{1,6}", 0..3).prop_map(|v| v.join("\n")),
    )
        .prop_map(
            |((customize, tool, wd), props, verbosity, (specify, targets), (fl, ds, nl, nar), extra)| {
                ConfigMapBuilder::new()
                    .set(keys::CUSTOMIZE_TOOL_PATH, &customize)
                    .set(keys::TOOL_PATH, &tool)
                    .working_directory(&wd)
                    .properties(&props)
                    .verbosity(&verbosity)
                    .set(keys::SPECIFY_TARGETS, &specify)
                    .set(keys::TARGETS, &targets)
                    .set(keys::FILE_LOGGER, &fl)
                    .set(keys::DETAILED_SUMMARY, &ds)
                    .set(keys::NO_LOGO, &nl)
                    .set(keys::NO_AUTO_RESPONSE, &nar)
                    .additional_parameters(&extra)
                    .build_task_config()
            },
        )
}

proptest! {
    #[test]
    fn test_verbosity_flag_exactly_once(cfg in config_strategy()) {
        let command = build_command(&cfg, ".");
        let count = command
            .argv
            .as_slice()
            .iter()
            .filter(|a| a.starts_with("/verbosity:"))
            .count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn test_project_file_is_last(cfg in config_strategy()) {
        let command = build_command(&cfg, ".");
        let last = command.argv.as_slice().last().cloned().unwrap_or_default();
        prop_assert!(last.ends_with("app.sln"));
        prop_assert!(!last.starts_with('/'));
    }

    #[test]
    fn test_tool_path_resolution(cfg in config_strategy()) {
        let command = build_command(&cfg, ".");
        let expected = if cfg.customize_tool_path { cfg.tool_path.as_str() } else { DEFAULT_TOOL_PATH };
        prop_assert_eq!(command.argv.program(), Some(expected));
    }

    #[test]
    fn test_build_is_deterministic(cfg in config_strategy(), dir in "[a-z]{1,8}") {
        prop_assert_eq!(build_command(&cfg, &dir), build_command(&cfg, &dir));
    }

    #[test]
    fn test_property_flags_precede_verbosity(cfg in config_strategy()) {
        let command = build_command(&cfg, ".");
        let argv = command.argv.as_slice();
        let verbosity_at = argv.iter().position(|a| a.starts_with("/verbosity:")).unwrap();
        for (i, arg) in argv.iter().enumerate() {
            if arg.starts_with("/property:") {
                prop_assert!(i < verbosity_at);
                prop_assert!(!arg.contains(' '));
            }
        }
    }
}
