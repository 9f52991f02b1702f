//! The parser boundary: the core requires a `parse(source) -> Result<File,
//! _>` and a `post_process(File) -> File` that finalizes operator
//! associativities and resolves name shadowing. The concrete parser is
//! supplied by the caller; this crate is generic over it.

use crate::ast::File;

pub trait SourceParser {
    type Error;

    fn parse(&self, source: &str) -> Result<File, Self::Error>;

    /// Finalizes operator associativities and resolves name shadowing.
    /// Applied as part of `lint` immediately after a successful parse.
    fn post_process(&self, file: File) -> File {
        file
    }
}
