// src/config/model.rs

use std::collections::BTreeMap;

/// Property keys understood by the task.
pub mod keys {
    pub const CUSTOMIZE_TOOL_PATH: &str = "CustomizeToolPath";
    pub const TOOL_PATH: &str = "ToolPath";
    pub const WORKING_DIRECTORY: &str = "WorkingDirectory";
    pub const SOLUTION_FILE: &str = "SolutionFile";
    pub const PROPERTIES: &str = "Properties";
    pub const VERBOSITY: &str = "Verbosity";
    pub const SPECIFY_TARGETS: &str = "SpecifyTargets";
    pub const TARGETS: &str = "Targets";
    pub const FILE_LOGGER: &str = "FileLogger";
    pub const DETAILED_SUMMARY: &str = "DetailedSummary";
    pub const NO_LOGO: &str = "NoLogo";
    pub const NO_AUTO_RESPONSE: &str = "NoAutoResponse";
    pub const ADDITIONAL_PARAMETERS: &str = "AdditionalParameters";
}

/// MSBuild shipped with .NET Framework 4.x.
pub const DEFAULT_TOOL_PATH: &str = r"C:\Windows\Microsoft.NET\Framework\v4.0.30319\MSBuild.exe";

pub const DEFAULT_WORKING_DIRECTORY: &str = ".";

pub const DEFAULT_VERBOSITY: &str = "normal";

/// One entry of the configuration schema advertised to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigProperty {
    pub key: &'static str,
    pub default_value: Option<&'static str>,
}

const fn property(key: &'static str, default_value: Option<&'static str>) -> ConfigProperty {
    ConfigProperty { key, default_value }
}

/// Every key the task declares, in presentation order.
pub const CONFIG_SCHEMA: &[ConfigProperty] = &[
    property(keys::CUSTOMIZE_TOOL_PATH, Some("false")),
    property(keys::TOOL_PATH, Some(DEFAULT_TOOL_PATH)),
    property(keys::WORKING_DIRECTORY, Some(DEFAULT_WORKING_DIRECTORY)),
    property(keys::SOLUTION_FILE, None),
    property(keys::PROPERTIES, None),
    property(keys::VERBOSITY, Some(DEFAULT_VERBOSITY)),
    property(keys::SPECIFY_TARGETS, Some("false")),
    property(keys::TARGETS, None),
    property(keys::FILE_LOGGER, Some("false")),
    property(keys::DETAILED_SUMMARY, Some("false")),
    property(keys::NO_LOGO, Some("false")),
    property(keys::NO_AUTO_RESPONSE, Some("false")),
    property(keys::ADDITIONAL_PARAMETERS, None),
];

/// Returns true if `key` is declared in [`CONFIG_SCHEMA`].
pub fn is_known_key(key: &str) -> bool {
    CONFIG_SCHEMA.iter().any(|p| p.key == key)
}

/// Raw configuration exactly as the host hands it over: string keys to
/// string values.
///
/// Lookups never fail; an absent key reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    values: BTreeMap<String, String>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Boolean flags are on only for the exact string `"true"`.
///
/// `"TRUE"`, `" true"`, `"yes"` and an absent key are all off.
pub fn parse_flag(value: &str) -> bool {
    value == "true"
}

/// Returns true when `s` is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Lines of a multi-line field, split on `\n` or `\r\n`, with blank lines
/// dropped.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !is_blank(line))
}

/// Removes every `\s` character (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`),
/// including interior ones. Other Unicode spaces such as U+00A0 are kept.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !is_regex_space(*c)).collect()
}

fn is_regex_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Typed view over a [`ConfigMap`].
///
/// Flags become real booleans here; text fields are kept verbatim so the
/// validator and command builder can apply their own normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskConfig {
    pub customize_tool_path: bool,
    pub tool_path: String,
    pub working_directory: String,
    pub solution_file: String,
    pub properties: String,
    pub verbosity: String,
    pub specify_targets: bool,
    pub targets: String,
    pub file_logger: bool,
    pub detailed_summary: bool,
    pub no_logo: bool,
    pub no_auto_response: bool,
    pub additional_parameters: String,
}

impl TaskConfig {
    pub fn from_map(map: &ConfigMap) -> Self {
        Self {
            customize_tool_path: parse_flag(map.get(keys::CUSTOMIZE_TOOL_PATH)),
            tool_path: map.get(keys::TOOL_PATH).to_string(),
            working_directory: map.get(keys::WORKING_DIRECTORY).to_string(),
            solution_file: map.get(keys::SOLUTION_FILE).to_string(),
            properties: map.get(keys::PROPERTIES).to_string(),
            verbosity: map.get(keys::VERBOSITY).to_string(),
            specify_targets: parse_flag(map.get(keys::SPECIFY_TARGETS)),
            targets: map.get(keys::TARGETS).to_string(),
            file_logger: parse_flag(map.get(keys::FILE_LOGGER)),
            detailed_summary: parse_flag(map.get(keys::DETAILED_SUMMARY)),
            no_logo: parse_flag(map.get(keys::NO_LOGO)),
            no_auto_response: parse_flag(map.get(keys::NO_AUTO_RESPONSE)),
            additional_parameters: map.get(keys::ADDITIONAL_PARAMETERS).to_string(),
        }
    }

    /// Tool executable to launch: the custom path when enabled, otherwise
    /// [`DEFAULT_TOOL_PATH`].
    pub fn effective_tool_path(&self) -> &str {
        if self.customize_tool_path {
            &self.tool_path
        } else {
            DEFAULT_TOOL_PATH
        }
    }

    pub fn effective_verbosity(&self) -> &str {
        if is_blank(&self.verbosity) {
            DEFAULT_VERBOSITY
        } else {
            &self.verbosity
        }
    }

    pub fn effective_working_directory(&self) -> &str {
        if is_blank(&self.working_directory) {
            DEFAULT_WORKING_DIRECTORY
        } else {
            self.working_directory.trim()
        }
    }
}

impl From<&ConfigMap> for TaskConfig {
    fn from(map: &ConfigMap) -> Self {
        TaskConfig::from_map(map)
    }
}
