//! `no_unused_let_bindings`: flags `let`-bound names never referenced
//! anywhere in the rest of the declaration. A context-carrying visitor
//! accumulates bindings and references as it walks, and a final
//! evaluation step reports whichever bindings never got referenced.
//!
//! Destructuring let-bindings carry no bound name in this AST and are
//! therefore never reported; only named function-style bindings
//! (`let f = ...`) are tracked. Scoping is whole-declaration, not
//! block-local: a name bound in a nested `let` is considered used if it
//! is referenced anywhere later in the same declaration, which is a
//! conservative simplification (false negatives, never false positives,
//! for genuinely shadowed names).

use std::collections::HashSet;

use crate::ast::{ExpressionKind, LetBinding};
use crate::diagnostic::Diagnostic;
use crate::range::Range;
use crate::rule::Rule;
use crate::schema::SchemaBuilder;

#[derive(Clone, Default)]
struct Context {
    bindings: Vec<(String, Range)>,
    referenced: HashSet<String>,
}

pub fn no_unused_let_bindings() -> Rule {
    SchemaBuilder::new("no_unused_let_bindings")
        .with_initial_context(Context::default())
        .with_expression_enter_visitor(|expression, mut ctx: Context| {
            match expression.kind.as_ref() {
                ExpressionKind::Let { bindings, .. } => {
                    for binding in bindings {
                        if let LetBinding::Function(f) = binding {
                            ctx.bindings.push((f.name.clone(), f.range));
                        }
                    }
                }
                ExpressionKind::FunctionOrValue(path, name) if path.is_empty() => {
                    ctx.referenced.insert(name.clone());
                }
                _ => {}
            }
            (vec![], ctx)
        })
        .with_final_evaluation(report_unused)
        .seal()
}

fn report_unused(ctx: Context) -> Vec<Diagnostic> {
    ctx.bindings
        .into_iter()
        .filter(|(name, _)| !ctx.referenced.contains(name))
        .map(|(name, range)| {
            Diagnostic::new(
                format!("`{name}` is never used"),
                vec![format!(
                    "Remove the unused let-binding `{name}`, or use it."
                )],
                range,
            )
        })
        .collect()
}
