//! Rule-testing harness: `RuleTester::run` exercises a rule's valid and
//! invalid cases against the real `lint`/`apply_fixes` pipeline. Scoped
//! to this engine's per-file, single-rule, no-options surface — no
//! plugins, no rule options, no aggregated-results summary mode.

use crate::fix::apply_fixes;
use crate::lint::{lint, FileInput};
use crate::parser::SourceParser;
use crate::project::Project;
use crate::rule::Rule;

pub struct RuleTests {
    pub valid: Vec<RuleTestValid>,
    pub invalid: Vec<RuleTestInvalid>,
}

impl RuleTests {
    pub fn new(valid: Vec<RuleTestValid>, invalid: Vec<RuleTestInvalid>) -> Self {
        Self { valid, invalid }
    }
}

/// A test case expected to produce no diagnostics.
pub struct RuleTestValid {
    pub code: String,
}

impl From<&str> for RuleTestValid {
    fn from(code: &str) -> Self {
        Self { code: code.to_owned() }
    }
}

/// A test case expected to produce exactly `errors.len()` diagnostics,
/// optionally checked against expected messages, and optionally checked
/// against a fixed-output string (`output = None` means "don't fix",
/// `output = Some(None)` means "fixing should leave the source
/// unchanged", `output = Some(Some(s))` means "fixing should produce
/// `s`").
pub struct RuleTestInvalid {
    pub code: String,
    pub errors: Vec<RuleTestExpectedError>,
    pub output: Option<Option<String>>,
}

impl RuleTestInvalid {
    pub fn new(code: impl Into<String>, errors: Vec<RuleTestExpectedError>) -> Self {
        Self {
            code: code.into(),
            errors,
            output: None,
        }
    }

    pub fn with_output(mut self, output: Option<impl Into<String>>) -> Self {
        self.output = Some(output.map(Into::into));
        self
    }
}

#[derive(Default)]
pub struct RuleTestExpectedError {
    pub message: Option<String>,
    pub line: Option<usize>,
}

impl From<&str> for RuleTestExpectedError {
    fn from(message: &str) -> Self {
        Self {
            message: Some(message.to_owned()),
            line: None,
        }
    }
}

/// Runs every valid and invalid test case for `rule` through the real
/// `lint`/`apply_fixes` pipeline, using `parser` both to parse the test
/// source and to validate any fix output.
pub struct RuleTester<'a, P: SourceParser> {
    rule: Rule,
    parser: &'a P,
}

impl<'a, P: SourceParser> RuleTester<'a, P> {
    pub fn run(rule: Rule, tests: RuleTests, parser: &'a P) {
        let tester = Self { rule, parser };
        for valid in &tests.valid {
            tester.run_valid(valid);
        }
        for invalid in &tests.invalid {
            tester.run_invalid(invalid);
        }
    }

    fn run_valid(&self, test: &RuleTestValid) {
        let diagnostics = self.lint(&test.code);
        assert!(
            diagnostics.is_empty(),
            "expected no diagnostics for {:?}, got: {diagnostics:#?}",
            test.code
        );
    }

    fn run_invalid(&self, test: &RuleTestInvalid) {
        let diagnostics = self.lint(&test.code);
        assert_eq!(
            diagnostics.len(),
            test.errors.len(),
            "expected {} diagnostic(s) for {:?}, got: {diagnostics:#?}",
            test.errors.len(),
            test.code
        );

        for (diagnostic, expected) in diagnostics.iter().zip(&test.errors) {
            if let Some(message) = &expected.message {
                assert_eq!(&diagnostic.diagnostic.message, message);
            }
            if let Some(line) = expected.line {
                assert_eq!(diagnostic.diagnostic.range.start.row, line);
            }
        }

        if let Some(expected_output) = &test.output {
            let fixes: Vec<_> = diagnostics
                .iter()
                .filter_map(|d| d.diagnostic.fixes.clone())
                .flatten()
                .collect();
            match expected_output {
                Some(expected) => {
                    let fixed = apply_fixes(&fixes, &test.code, self.parser)
                        .unwrap_or_else(|e| panic!("fix did not apply cleanly: {e:?}"));
                    assert_eq!(&fixed, expected);
                }
                None => {
                    assert!(
                        fixes.is_empty(),
                        "expected no fix to be offered for {:?}",
                        test.code
                    );
                }
            }
        }
    }

    fn lint(&self, code: &str) -> Vec<crate::diagnostic::LintDiagnostic> {
        lint(
            std::slice::from_ref(&self.rule),
            &Project::default(),
            FileInput {
                path: "Test.elm",
                source: code,
            },
            self.parser,
        )
    }
}
