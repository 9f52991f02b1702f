//! `no_exposing_all`: flags `module X exposing (..)` in favor of an
//! explicit exposing list.

use crate::ast::{Exposing, ModuleDefinition};
use crate::diagnostic::Diagnostic;
use crate::rule::Rule;
use crate::schema::SchemaBuilder;

pub fn no_exposing_all() -> Rule {
    SchemaBuilder::new("no_exposing_all")
        .with_simple_module_definition_visitor(check_module_definition)
        .seal()
}

fn check_module_definition(module_definition: &ModuleDefinition) -> Vec<Diagnostic> {
    match module_definition.exposing {
        Exposing::All => vec![Diagnostic::new(
            format!("Module `{}` exposes everything", module_definition.name_string()),
            vec!["List the exported names explicitly instead of `exposing (..)`.".to_owned()],
            module_definition.range,
        )],
        Exposing::Explicit(_) => vec![],
    }
}
