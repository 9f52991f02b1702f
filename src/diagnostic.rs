//! Rule-level and lint-level diagnostics.

use derive_builder::Builder;

use crate::fix::Fix;
use crate::range::Range;

/// A rule-level diagnostic: message, non-empty details, the range it's
/// reported at, and an optional list of fixes. The non-empty-details
/// invariant is enforced by the builder's `validate` hook.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"), setter(into))]
pub struct Diagnostic {
    pub message: String,
    pub details: Vec<String>,
    pub range: Range,
    #[builder(default, setter(strip_option))]
    pub fixes: Option<Vec<Fix>>,
}

impl DiagnosticBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.details.as_ref() {
            Some(details) if !details.is_empty() => Ok(()),
            _ => Err("Diagnostic details must be a non-empty list".to_owned()),
        }
    }
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, details: Vec<String>, range: Range) -> Self {
        assert!(!details.is_empty(), "Diagnostic details must be non-empty");
        Self {
            message: message.into(),
            details,
            range,
            fixes: None,
        }
    }

    /// Replaces this diagnostic's fixes. An empty list normalizes to "no
    /// fixes" so callers never have to distinguish `Some(vec![])` from
    /// `None`.
    pub fn with_fixes(mut self, fixes: Vec<Fix>) -> Self {
        self.fixes = if fixes.is_empty() { None } else { Some(fixes) };
        self
    }
}

/// A rule-level diagnostic tagged with the rule and module that produced
/// it. Module name is absent only for the synthetic parse-error
/// diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct LintDiagnostic {
    pub rule_name: String,
    pub module_name: Option<String>,
    pub diagnostic: Diagnostic,
}

pub const PARSING_ERROR_RULE_NAME: &str = "ParsingError";
