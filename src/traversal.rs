//! The AST traversal driver: a deterministic pre-/post-order walk of
//! module, imports, declarations and expressions, driving a sealed
//! schema's visitors. The AST is heterogeneous and statically typed, so
//! each node kind gets its own match arm instead of a single generic
//! node type.

use tracing::trace;

use crate::ast::{Declaration, Expression, File};
use crate::diagnostic::Diagnostic;
use crate::project::Project;
use crate::schema::Visitors;

/// Runs one analyzer invocation: initializes `context`, drives every
/// visitor slot in a fixed order, and returns the diagnostics in
/// traversal order.
pub(crate) fn run<Ctx: Clone>(
    visitors: &Visitors<Ctx>,
    initial_context: Ctx,
    project: &Project,
    file: &File,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut context = initial_context;

    context = match &visitors.elm_json {
        Some(visitor) => {
            let (new_diagnostics, new_context) = visitor(project.elm_json(), context);
            diagnostics.extend(new_diagnostics);
            new_context
        }
        None => context,
    };
    context = call(
        &visitors.module_definition,
        &file.module_definition,
        context,
        &mut diagnostics,
    );

    for import in &file.imports {
        context = call(&visitors.import, import, context, &mut diagnostics);
    }

    context = call(
        &visitors.declaration_list,
        file.declarations.as_slice(),
        context,
        &mut diagnostics,
    );

    for declaration in &file.declarations {
        context = visit_declaration(visitors, declaration, context, &mut diagnostics);
    }

    if let Some(final_evaluation) = &visitors.final_evaluation {
        diagnostics.extend(final_evaluation(context));
    }

    diagnostics
}

fn visit_declaration<Ctx: Clone>(
    visitors: &Visitors<Ctx>,
    declaration: &Declaration,
    context: Ctx,
    diagnostics: &mut Vec<Diagnostic>,
) -> Ctx {
    trace!(?declaration.range, "entering declaration");
    let mut context = call(&visitors.declaration_enter, declaration, context, diagnostics);

    for expression in declaration.contained_expressions() {
        context = visit_expression(visitors, expression, context, diagnostics);
    }

    context = call(&visitors.declaration_exit, declaration, context, diagnostics);
    trace!(?declaration.range, "exiting declaration");
    context
}

fn visit_expression<Ctx: Clone>(
    visitors: &Visitors<Ctx>,
    expression: &Expression,
    context: Ctx,
    diagnostics: &mut Vec<Diagnostic>,
) -> Ctx {
    let mut context = call(&visitors.expression_enter, expression, context, diagnostics);

    for child in expression.kind.children() {
        context = visit_expression(visitors, child, context, diagnostics);
    }

    call(&visitors.expression_exit, expression, context, diagnostics)
}

type NodeVisitor<Ctx, Node> = std::rc::Rc<dyn Fn(&Node, Ctx) -> (Vec<Diagnostic>, Ctx)>;

/// Invokes an optional visitor slot, extending `diagnostics` with what it
/// produced and returning its updated context. A missing slot is a no-op:
/// unchanged context, no diagnostics.
fn call<Ctx, Node: ?Sized>(
    visitor: &Option<NodeVisitor<Ctx, Node>>,
    node: &Node,
    context: Ctx,
    diagnostics: &mut Vec<Diagnostic>,
) -> Ctx {
    match visitor {
        Some(visitor) => {
            let (new_diagnostics, new_context) = visitor(node, context);
            diagnostics.extend(new_diagnostics);
            new_context
        }
        None => context,
    }
}
