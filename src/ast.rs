//! The AST contract this crate traverses. The traversal driver only
//! depends on this shape; the concrete parser producing it is supplied
//! by the caller.

use crate::range::Range;

#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub module_definition: ModuleDefinition,
    pub imports: Vec<Import>,
    pub declarations: Vec<Declaration>,
}

/// A module's declared name path, regardless of which module flavor
/// (normal / port / effect) declared it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDefinition {
    pub range: Range,
    pub flavor: ModuleFlavor,
    /// Non-empty sequence of identifier segments, e.g. `["Foo", "Bar"]` for
    /// `module Foo.Bar exposing (..)`.
    pub name: Vec<String>,
    pub exposing: Exposing,
}

impl ModuleDefinition {
    pub fn name_string(&self) -> String {
        self.name.join(".")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFlavor {
    Normal,
    Port,
    Effect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Exposing {
    All,
    Explicit(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub range: Range,
    pub module_name: Vec<String>,
    pub alias: Option<String>,
    pub exposing: Option<Exposing>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub range: Range,
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    Function(FunctionDeclaration),
    TypeAlias(TypeAliasDeclaration),
    CustomType(CustomTypeDeclaration),
    Port(PortDeclaration),
    Infix(InfixDeclaration),
    Destructuring(DestructuringDeclaration),
}

impl Declaration {
    /// The expressions a declaration directly contains: a function
    /// declaration's implementation body, a destructuring declaration's
    /// RHS, and nothing for every other declaration kind.
    pub fn contained_expressions(&self) -> Vec<&Expression> {
        match &self.kind {
            DeclarationKind::Function(f) => vec![&f.implementation.body],
            DeclarationKind::Destructuring(d) => vec![&d.expression],
            DeclarationKind::TypeAlias(_)
            | DeclarationKind::CustomType(_)
            | DeclarationKind::Port(_)
            | DeclarationKind::Infix(_) => vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub implementation: FunctionImplementation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionImplementation {
    pub range: Range,
    pub arguments: Vec<String>,
    pub body: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDeclaration {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomTypeDeclaration {
    pub name: String,
    pub constructors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortDeclaration {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixDeclaration {
    pub operator: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DestructuringDeclaration {
    pub expression: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    Non,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LetBinding {
    Function(LetFunction),
    Destructuring(LetDestructuring),
}

impl LetBinding {
    pub fn range(&self) -> Range {
        match self {
            LetBinding::Function(f) => f.range,
            LetBinding::Destructuring(d) => d.range,
        }
    }

    /// The expression a let-binding directly contains: a let-function's
    /// body, or a let-destructuring's RHS.
    pub fn contained_expression(&self) -> &Expression {
        match self {
            LetBinding::Function(f) => &f.body,
            LetBinding::Destructuring(d) => &d.expression,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetFunction {
    pub range: Range,
    pub name: String,
    pub arguments: Vec<String>,
    pub body: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetDestructuring {
    pub range: Range,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseArm {
    pub pattern: String,
    pub body: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub range: Range,
    pub kind: Box<ExpressionKind>,
}

impl Expression {
    pub fn new(range: Range, kind: ExpressionKind) -> Self {
        Self {
            range,
            kind: Box::new(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Application(Vec<Expression>),
    IfThenElse {
        cond: Expression,
        then_branch: Expression,
        else_branch: Expression,
    },
    Let {
        bindings: Vec<LetBinding>,
        body: Expression,
    },
    Case {
        scrutinee: Expression,
        arms: Vec<CaseArm>,
    },
    Lambda {
        arguments: Vec<String>,
        body: Expression,
    },
    Tupled(Vec<Expression>),
    ListLiteral(Vec<Expression>),
    RecordLiteral(Vec<RecordField>),
    RecordUpdate {
        record_name: String,
        fields: Vec<RecordField>,
    },
    Parenthesized(Expression),
    OperatorApplication {
        operator: String,
        associativity: Associativity,
        left: Expression,
        right: Expression,
    },
    RecordAccess {
        record: Expression,
        field: String,
    },
    Negation(Expression),
    Integer(i64),
    Float(f64),
    Character(char),
    StringLiteral(String),
    Unit,
    FunctionOrValue(Vec<String>, String),
    Hex(i64),
    PrefixOperator(String),
    RecordAccessFunction(String),
    GlslLiteral(String),
}

impl ExpressionKind {
    /// The ordered list of direct expression children. Patterns,
    /// field/updated-record identifiers and lambda arguments are not
    /// expression children.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            ExpressionKind::Application(operands) => operands.iter().collect(),
            ExpressionKind::Tupled(elements) | ExpressionKind::ListLiteral(elements) => {
                elements.iter().collect()
            }
            ExpressionKind::RecordLiteral(fields) => fields.iter().map(|f| &f.value).collect(),
            ExpressionKind::RecordUpdate { fields, .. } => {
                fields.iter().map(|f| &f.value).collect()
            }
            ExpressionKind::Parenthesized(inner) | ExpressionKind::Negation(inner) => {
                vec![inner]
            }
            ExpressionKind::RecordAccess { record, .. } => vec![record],
            ExpressionKind::IfThenElse {
                cond,
                then_branch,
                else_branch,
            } => vec![cond, then_branch, else_branch],
            ExpressionKind::Let { bindings, body } => bindings
                .iter()
                .map(|b| b.contained_expression())
                .chain(std::iter::once(body))
                .collect(),
            ExpressionKind::Case { scrutinee, arms } => std::iter::once(scrutinee)
                .chain(arms.iter().map(|arm| &arm.body))
                .collect(),
            ExpressionKind::Lambda { body, .. } => vec![body],
            ExpressionKind::OperatorApplication {
                associativity,
                left,
                right,
                ..
            } => match associativity {
                // Deliberately asymmetric so evaluation-order-dependent
                // rules see operands in semantic order.
                Associativity::Right => vec![right, left],
                Associativity::Left | Associativity::Non => vec![left, right],
            },
            ExpressionKind::Integer(_)
            | ExpressionKind::Float(_)
            | ExpressionKind::Character(_)
            | ExpressionKind::StringLiteral(_)
            | ExpressionKind::Unit
            | ExpressionKind::FunctionOrValue(..)
            | ExpressionKind::Hex(_)
            | ExpressionKind::PrefixOperator(_)
            | ExpressionKind::RecordAccessFunction(_)
            | ExpressionKind::GlslLiteral(_) => vec![],
        }
    }
}
