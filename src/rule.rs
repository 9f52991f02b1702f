//! `Rule`: `{name, analyzer: (Project, File) -> List<Diagnostic>}`, built
//! by sealing a traversal schema into an `Rc<dyn Fn>` analyzer closure.

use std::rc::Rc;

use crate::ast::File;
use crate::diagnostic::Diagnostic;
use crate::project::Project;
use crate::schema::Visitors;
use crate::traversal;

type Analyzer = Rc<dyn Fn(&Project, &File) -> Vec<Diagnostic>>;

/// An immutable, constructed-once rule. The analyzer is a closure over the
/// sealed schema; never re-bound.
#[derive(Clone)]
pub struct Rule {
    pub name: String,
    analyzer: Analyzer,
}

impl Rule {
    pub(crate) fn from_schema<Ctx: Clone + 'static>(
        name: String,
        initial_context: Ctx,
        visitors: Visitors<Ctx>,
    ) -> Self {
        assert!(!name.is_empty(), "a rule's name must be non-empty");
        let visitors = Rc::new(visitors);
        let initial_context = Rc::new(initial_context);
        let analyzer: Analyzer = Rc::new(move |project, file| {
            traversal::run(&visitors, (*initial_context).clone(), project, file)
        });
        Self { name, analyzer }
    }

    /// Runs this rule's analyzer against one file.
    pub fn run(&self, project: &Project, file: &File) -> Vec<Diagnostic> {
        (self.analyzer)(project, file)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}
