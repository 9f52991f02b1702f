//! Rule schema & builder: a schema is built incrementally and then sealed
//! into a `Rule`. Two invariants need enforcing — `with_initial_context`
//! is only callable before the first visitor, and sealing requires at
//! least one visitor — so the builder is split into two typestates
//! (`SchemaBuilder` / `PopulatedSchemaBuilder`) rather than checked at
//! runtime.

use std::rc::Rc;

use crate::ast::{Declaration, Expression, Import, ModuleDefinition};
use crate::diagnostic::Diagnostic;
use crate::project::ElmProject;
use crate::rule::Rule;

/// `(diagnostics, updated context)`, the universal shape of a context
/// visitor call.
pub type VisitResult<Ctx> = (Vec<Diagnostic>, Ctx);

type ElmJsonVisitor<Ctx> = Rc<dyn Fn(Option<&ElmProject>, Ctx) -> VisitResult<Ctx>>;
type ModuleDefinitionVisitor<Ctx> = Rc<dyn Fn(&ModuleDefinition, Ctx) -> VisitResult<Ctx>>;
type ImportVisitor<Ctx> = Rc<dyn Fn(&Import, Ctx) -> VisitResult<Ctx>>;
type DeclarationListVisitor<Ctx> = Rc<dyn Fn(&[Declaration], Ctx) -> VisitResult<Ctx>>;
type DeclarationVisitor<Ctx> = Rc<dyn Fn(&Declaration, Ctx) -> VisitResult<Ctx>>;
type ExpressionVisitor<Ctx> = Rc<dyn Fn(&Expression, Ctx) -> VisitResult<Ctx>>;
type FinalEvaluation<Ctx> = Rc<dyn Fn(Ctx) -> Vec<Diagnostic>>;

/// The visitor slots a traversal invokes. Owned by a sealed `Rule` and
/// consulted by the traversal driver; not constructed directly by rule
/// authors — use `SchemaBuilder`.
pub(crate) struct Visitors<Ctx> {
    pub(crate) elm_json: Option<ElmJsonVisitor<Ctx>>,
    pub(crate) module_definition: Option<ModuleDefinitionVisitor<Ctx>>,
    pub(crate) import: Option<ImportVisitor<Ctx>>,
    pub(crate) declaration_list: Option<DeclarationListVisitor<Ctx>>,
    pub(crate) declaration_enter: Option<DeclarationVisitor<Ctx>>,
    pub(crate) declaration_exit: Option<DeclarationVisitor<Ctx>>,
    pub(crate) expression_enter: Option<ExpressionVisitor<Ctx>>,
    pub(crate) expression_exit: Option<ExpressionVisitor<Ctx>>,
    pub(crate) final_evaluation: Option<FinalEvaluation<Ctx>>,
}

impl<Ctx> Default for Visitors<Ctx> {
    fn default() -> Self {
        Self {
            elm_json: None,
            module_definition: None,
            import: None,
            declaration_list: None,
            declaration_enter: None,
            declaration_exit: None,
            expression_enter: None,
            expression_exit: None,
            final_evaluation: None,
        }
    }
}

/// `Schema(noContext)` through `Schema(noContext, ContextT)` before any
/// visitor has been installed. The only states from which
/// `with_initial_context` is callable; any of the `with_*_visitor` methods
/// consume this and hand back a `PopulatedSchemaBuilder`, which has no
/// `with_initial_context` — making "initial context after a visitor" a
/// compile error rather than a runtime one.
pub struct SchemaBuilder<Ctx = ()> {
    name: String,
    initial_context: Ctx,
}

impl SchemaBuilder<()> {
    /// `newSchema(name)`: starts with unit context and all visitors
    /// no-op.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_context: (),
        }
    }
}

impl<Ctx> SchemaBuilder<Ctx> {
    /// `withInitialContext`: installs a typed initial context. Only
    /// callable immediately after `new` — once any visitor is installed,
    /// the builder's type no longer exposes this method.
    pub fn with_initial_context<NewCtx>(self, value: NewCtx) -> SchemaBuilder<NewCtx> {
        SchemaBuilder {
            name: self.name,
            initial_context: value,
        }
    }
}

macro_rules! empty_to_populated {
    ($(#[$meta:meta])* $method:ident, $field:ident, $visitor_ty:ident, $param:ty) => {
        $(#[$meta])*
        pub fn $method(
            self,
            f: impl Fn($param, Ctx) -> VisitResult<Ctx> + 'static,
        ) -> PopulatedSchemaBuilder<Ctx>
        where
            Ctx: Clone + 'static,
        {
            PopulatedSchemaBuilder::from_empty(self.name, self.initial_context).$method(f)
        }
    };
}

impl<Ctx> SchemaBuilder<Ctx> {
    empty_to_populated!(
        /// `withElmJsonVisitor`.
        with_elm_json_visitor,
        elm_json,
        ElmJsonVisitor,
        Option<&ElmProject>
    );
    empty_to_populated!(
        /// `withModuleDefinitionVisitor`.
        with_module_definition_visitor,
        module_definition,
        ModuleDefinitionVisitor,
        &ModuleDefinition
    );
    empty_to_populated!(
        /// `withImportVisitor`.
        with_import_visitor,
        import,
        ImportVisitor,
        &Import
    );
    empty_to_populated!(
        /// `withDeclarationListVisitor`.
        with_declaration_list_visitor,
        declaration_list,
        DeclarationListVisitor,
        &[Declaration]
    );
    empty_to_populated!(
        /// `withDeclarationVisitor`, OnEnter half.
        with_declaration_enter_visitor,
        declaration_enter,
        DeclarationVisitor,
        &Declaration
    );
    empty_to_populated!(
        /// `withDeclarationVisitor`, OnExit half.
        with_declaration_exit_visitor,
        declaration_exit,
        DeclarationVisitor,
        &Declaration
    );
    empty_to_populated!(
        /// `withExpressionVisitor`, OnEnter half.
        with_expression_enter_visitor,
        expression_enter,
        ExpressionVisitor,
        &Expression
    );
    empty_to_populated!(
        /// `withExpressionVisitor`, OnExit half.
        with_expression_exit_visitor,
        expression_exit,
        ExpressionVisitor,
        &Expression
    );

    /// `withFinalEvaluation`.
    pub fn with_final_evaluation(
        self,
        f: impl Fn(Ctx) -> Vec<Diagnostic> + 'static,
    ) -> PopulatedSchemaBuilder<Ctx>
    where
        Ctx: Clone + 'static,
    {
        PopulatedSchemaBuilder::from_empty(self.name, self.initial_context).with_final_evaluation(f)
    }

    /// `withSimpleModuleDefinitionVisitor`: adapts a context-free
    /// function by threading context through unchanged.
    pub fn with_simple_module_definition_visitor(
        self,
        f: impl Fn(&ModuleDefinition) -> Vec<Diagnostic> + 'static,
    ) -> PopulatedSchemaBuilder<Ctx>
    where
        Ctx: Clone + 'static,
    {
        PopulatedSchemaBuilder::from_empty(self.name, self.initial_context)
            .with_simple_module_definition_visitor(f)
    }

    /// `withSimpleImportVisitor`.
    pub fn with_simple_import_visitor(
        self,
        f: impl Fn(&Import) -> Vec<Diagnostic> + 'static,
    ) -> PopulatedSchemaBuilder<Ctx>
    where
        Ctx: Clone + 'static,
    {
        PopulatedSchemaBuilder::from_empty(self.name, self.initial_context)
            .with_simple_import_visitor(f)
    }

    /// `withSimpleDeclarationVisitor`: fires on OnEnter only. This
    /// asymmetry with the context-carrying variant is intentional.
    pub fn with_simple_declaration_visitor(
        self,
        f: impl Fn(&Declaration) -> Vec<Diagnostic> + 'static,
    ) -> PopulatedSchemaBuilder<Ctx>
    where
        Ctx: Clone + 'static,
    {
        PopulatedSchemaBuilder::from_empty(self.name, self.initial_context)
            .with_simple_declaration_visitor(f)
    }

    /// `withSimpleExpressionVisitor`: fires on OnEnter only.
    pub fn with_simple_expression_visitor(
        self,
        f: impl Fn(&Expression) -> Vec<Diagnostic> + 'static,
    ) -> PopulatedSchemaBuilder<Ctx>
    where
        Ctx: Clone + 'static,
    {
        PopulatedSchemaBuilder::from_empty(self.name, self.initial_context)
            .with_simple_expression_visitor(f)
    }
}

/// A schema with at least one visitor installed. Exposes `seal`
/// (`fromSchema`); `SchemaBuilder` (the empty state) does not, so sealing
/// an empty schema is a compile error, not a runtime one.
pub struct PopulatedSchemaBuilder<Ctx> {
    name: String,
    initial_context: Ctx,
    visitors: Visitors<Ctx>,
}

impl<Ctx: Clone + 'static> PopulatedSchemaBuilder<Ctx> {
    fn from_empty(name: String, initial_context: Ctx) -> Self {
        Self {
            name,
            initial_context,
            visitors: Visitors::default(),
        }
    }

    pub fn with_elm_json_visitor(
        mut self,
        f: impl Fn(Option<&ElmProject>, Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.elm_json = Some(Rc::new(f));
        self
    }

    pub fn with_module_definition_visitor(
        mut self,
        f: impl Fn(&ModuleDefinition, Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.module_definition = Some(Rc::new(f));
        self
    }

    pub fn with_import_visitor(
        mut self,
        f: impl Fn(&Import, Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.import = Some(Rc::new(f));
        self
    }

    pub fn with_declaration_list_visitor(
        mut self,
        f: impl Fn(&[Declaration], Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.declaration_list = Some(Rc::new(f));
        self
    }

    pub fn with_declaration_enter_visitor(
        mut self,
        f: impl Fn(&Declaration, Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.declaration_enter = Some(Rc::new(f));
        self
    }

    pub fn with_declaration_exit_visitor(
        mut self,
        f: impl Fn(&Declaration, Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.declaration_exit = Some(Rc::new(f));
        self
    }

    pub fn with_expression_enter_visitor(
        mut self,
        f: impl Fn(&Expression, Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.expression_enter = Some(Rc::new(f));
        self
    }

    pub fn with_expression_exit_visitor(
        mut self,
        f: impl Fn(&Expression, Ctx) -> VisitResult<Ctx> + 'static,
    ) -> Self {
        self.visitors.expression_exit = Some(Rc::new(f));
        self
    }

    pub fn with_final_evaluation(mut self, f: impl Fn(Ctx) -> Vec<Diagnostic> + 'static) -> Self {
        self.visitors.final_evaluation = Some(Rc::new(f));
        self
    }

    pub fn with_simple_module_definition_visitor(
        self,
        f: impl Fn(&ModuleDefinition) -> Vec<Diagnostic> + 'static,
    ) -> Self {
        self.with_module_definition_visitor(move |node, ctx| (f(node), ctx))
    }

    pub fn with_simple_import_visitor(self, f: impl Fn(&Import) -> Vec<Diagnostic> + 'static) -> Self {
        self.with_import_visitor(move |node, ctx| (f(node), ctx))
    }

    pub fn with_simple_declaration_visitor(
        self,
        f: impl Fn(&Declaration) -> Vec<Diagnostic> + 'static,
    ) -> Self {
        self.with_declaration_enter_visitor(move |node, ctx| (f(node), ctx))
    }

    pub fn with_simple_expression_visitor(
        self,
        f: impl Fn(&Expression) -> Vec<Diagnostic> + 'static,
    ) -> Self {
        self.with_expression_enter_visitor(move |node, ctx| (f(node), ctx))
    }

    /// `fromSchema`: produces the immutable `Rule`, erasing `Ctx` behind
    /// the `(Project, File) -> Vec<Diagnostic>` analyzer interface.
    pub fn seal(self) -> Rule {
        Rule::from_schema(self.name, self.initial_context, self.visitors)
    }
}
