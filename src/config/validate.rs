// src/config/validate.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::config::model::{is_blank, keys, non_blank_lines, strip_whitespace, TaskConfig};

/// `name=value`, both sides ASCII word characters.
static PROPERTY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+=[A-Za-z0-9_]+$").expect("property regex is valid")
});

/// A problem with one configuration field, addressed by its key so a UI can
/// show it next to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered list of field errors. Empty means the configuration is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First error reported for `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Check a task configuration.
///
/// Each rule reports at most one error for its own field and the rules are
/// always applied in the same order:
/// - a custom tool path needs `ToolPath`
/// - `SolutionFile` is required
/// - every `Properties` line must be `name=value`
/// - `SpecifyTargets` needs `Targets`
///
/// Never fails; problems are returned as data.
pub fn validate_config(cfg: &TaskConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    validate_tool_path(cfg, &mut result);
    validate_solution_file(cfg, &mut result);
    validate_properties(cfg, &mut result);
    validate_targets(cfg, &mut result);
    result
}

fn validate_tool_path(cfg: &TaskConfig, result: &mut ValidationResult) {
    if cfg.customize_tool_path && is_blank(&cfg.tool_path) {
        result.add_error(ValidationError::new(
            keys::TOOL_PATH,
            "path must be specified",
        ));
    }
}

fn validate_solution_file(cfg: &TaskConfig, result: &mut ValidationResult) {
    if is_blank(&cfg.solution_file) {
        result.add_error(ValidationError::new(
            keys::SOLUTION_FILE,
            "a solution/project file must be specified",
        ));
    }
}

fn validate_properties(cfg: &TaskConfig, result: &mut ValidationResult) {
    if !is_blank(&cfg.properties) && !properties_valid(&cfg.properties) {
        result.add_error(ValidationError::new(
            keys::PROPERTIES,
            "must be one property per line formatted name=value",
        ));
    }
}

fn validate_targets(cfg: &TaskConfig, result: &mut ValidationResult) {
    if cfg.specify_targets && is_blank(&cfg.targets) {
        result.add_error(ValidationError::new(
            keys::TARGETS,
            "Targets cannot be empty when SpecifyTargets is enabled",
        ));
    }
}

/// True if every non-blank line, once all whitespace is removed, reads
/// `name=value`. Stops at the first bad line.
pub fn properties_valid(properties: &str) -> bool {
    non_blank_lines(properties).all(|line| PROPERTY_LINE.is_match(&strip_whitespace(line)))
}
