//! `forbid_debug`: flags `Debug.log`/`Debug.todo` application expressions.

use crate::ast::{Expression, ExpressionKind};
use crate::diagnostic::Diagnostic;
use crate::fix::Fix;
use crate::range::Range;
use crate::rule::Rule;
use crate::schema::SchemaBuilder;

pub fn forbid_debug() -> Rule {
    SchemaBuilder::new("forbid_debug")
        .with_simple_expression_visitor(check_expression)
        .seal()
}

fn check_expression(expression: &Expression) -> Vec<Diagnostic> {
    let ExpressionKind::Application(operands) = expression.kind.as_ref() else {
        return vec![];
    };
    let Some(callee) = operands.first() else {
        return vec![];
    };
    let Some(name) = debug_function_name(callee) else {
        return vec![];
    };

    let diagnostic = Diagnostic::new(
        format!("`Debug.{name}` is not allowed"),
        vec![format!(
            "`Debug.{name}` is a debugging aid and must be removed before shipping."
        )],
        callee.range,
    );

    // Only safe to auto-fix when the call has at least one argument beyond
    // the last one: removing everything up to the last argument's start
    // leaves that argument standing in place of the whole call. A bare
    // `Debug.log` with no arguments, or exactly one, is left unfixed.
    let diagnostic = match operands.len() {
        len if len > 2 => {
            let last_argument = operands.last().expect("len > 2");
            diagnostic.with_fixes(vec![Fix::Removal(Range::new(
                expression.range.start,
                last_argument.range.start,
            ))])
        }
        _ => diagnostic,
    };

    vec![diagnostic]
}

fn debug_function_name(expression: &Expression) -> Option<&'static str> {
    match expression.kind.as_ref() {
        ExpressionKind::FunctionOrValue(path, name) if path.as_slice() == ["Debug".to_owned()] => {
            match name.as_str() {
                "log" => Some("log"),
                "todo" => Some("todo"),
                _ => None,
            }
        }
        _ => None,
    }
}
