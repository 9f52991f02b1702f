//! The lint engine: parses one file, runs every configured rule against
//! it, tags diagnostics with rule and module identity, and returns them
//! in positional order. Single-file, single-threaded — there is no
//! cross-file state or parallel rule execution to coordinate.

use tracing::{debug, instrument};

use crate::diagnostic::{Diagnostic, LintDiagnostic, PARSING_ERROR_RULE_NAME};
use crate::parser::SourceParser;
use crate::position::Position;
use crate::project::Project;
use crate::range::{self, Range};
use crate::rule::Rule;

/// `{path, source}` — the lint engine never touches the filesystem itself;
/// callers read the file and hand over its contents.
#[derive(Debug, Clone)]
pub struct FileInput<'a> {
    pub path: &'a str,
    pub source: &'a str,
}

/// Parses `file`, runs every rule in `rules` against it, and returns the
/// resulting diagnostics sorted by range. Never panics on malformed input
/// and never mutates `file` or `project`.
#[instrument(skip_all, fields(path = %file.path))]
pub fn lint<P: SourceParser>(
    rules: &[Rule],
    project: &Project,
    file: FileInput<'_>,
    parser: &P,
) -> Vec<LintDiagnostic> {
    let parsed = match parser.parse(file.source) {
        Ok(parsed) => parsed,
        Err(_) => {
            debug!("parse failed, returning synthetic ParsingError diagnostic");
            return vec![parsing_error_diagnostic(file.path)];
        }
    };
    let parsed = parser.post_process(parsed);
    let module_name = parsed.module_definition.name_string();

    let mut diagnostics: Vec<LintDiagnostic> = rules
        .iter()
        .flat_map(|rule| {
            let module_name = module_name.clone();
            rule.run(project, &parsed)
                .into_iter()
                .map(move |diagnostic| LintDiagnostic {
                    rule_name: rule.name.clone(),
                    module_name: Some(module_name.clone()),
                    diagnostic,
                })
        })
        .collect();

    diagnostics.sort_by(|a, b| range::compare_for_diagnostics(a.diagnostic.range, b.diagnostic.range));

    debug!(num_diagnostics = diagnostics.len(), "lint finished");
    diagnostics
}

fn parsing_error_diagnostic(path: &str) -> LintDiagnostic {
    let zero = Position::new(0, 0);
    LintDiagnostic {
        rule_name: PARSING_ERROR_RULE_NAME.to_owned(),
        module_name: None,
        diagnostic: Diagnostic::new(
            format!("Could not parse {path}"),
            vec!["The file contains a syntax error.".to_owned()],
            Range::new(zero, zero),
        ),
    }
}
