//! A static-analysis engine for a functional-programming source language:
//! parse a file into an AST, run a configurable set of rules over it, and
//! emit structured diagnostics with optional machine-applicable fixes.
//!
//! The core is parser-agnostic (see [`parser::SourceParser`]) and
//! single-file, single-threaded; it owns no I/O.

mod ast;
mod diagnostic;
mod fix;
mod lint;
mod parser;
mod position;
mod project;
mod range;
pub mod rules;
mod rule;
mod schema;
pub mod testing;
mod traversal;

pub use ast::{
    Associativity, CaseArm, CustomTypeDeclaration, Declaration, DeclarationKind,
    DestructuringDeclaration, Exposing, Expression, ExpressionKind, File, FunctionDeclaration,
    FunctionImplementation, Import, InfixDeclaration, LetBinding, LetDestructuring, LetFunction,
    ModuleDefinition, ModuleFlavor, PortDeclaration, RecordField, TypeAliasDeclaration,
};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, LintDiagnostic, PARSING_ERROR_RULE_NAME};
pub use fix::{apply_fixes, Fix, FixError, FixResult};
pub use lint::{lint, FileInput};
pub use parser::SourceParser;
pub use position::{compare as compare_positions, Position};
pub use project::{ApplicationProject, ElmProject, ExposedModules, PackageProject, Project};
pub use range::{
    collide, compare_for_diagnostics, merge_ranges, sort_by_start_descending, Range,
};
pub use rule::Rule;
pub use schema::{PopulatedSchemaBuilder, SchemaBuilder, VisitResult};
