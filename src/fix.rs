//! The fix engine: range-scoped textual edits, overlap detection, and
//! application with a post-application re-parse check. Edits are applied
//! back to front by line/column rather than by byte offset, so an
//! earlier edit never shifts the position of one not yet applied.

use itertools::Itertools;

use crate::parser::SourceParser;
use crate::position::Position;
use crate::range::{self, Range};

/// A single textual edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Fix {
    Removal(Range),
    Replacement(Range, String),
    Insertion(Position, String),
}

impl Fix {
    /// The range this fix occupies; an insertion occupies the zero-length
    /// range `[pos, pos]`.
    pub fn range(&self) -> Range {
        match self {
            Fix::Removal(range) | Fix::Replacement(range, _) => *range,
            Fix::Insertion(pos, _) => Range::at(*pos),
        }
    }

    /// The text this fix splices in; a removal's replacement is `""`.
    pub fn replacement_text(&self) -> &str {
        match self {
            Fix::Removal(_) => "",
            Fix::Replacement(_, text) | Fix::Insertion(_, text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    /// Applying every fix produced text identical to the input.
    Unchanged,
    /// The result re-parsed with a failure; the failed text is carried so
    /// a caller can inspect it, but it is never adopted as the new source.
    SourceCodeIsNotValid(String),
    /// At least two fixes in the batch had colliding ranges.
    HasCollisionsInFixRanges,
}

pub type FixResult = Result<String, FixError>;

/// Applies a batch of fixes to `source`, validating the result by
/// re-parsing it with `parser`.
pub fn apply_fixes<P: SourceParser>(fixes: &[Fix], source: &str, parser: &P) -> FixResult {
    for i in 0..fixes.len() {
        for j in (i + 1)..fixes.len() {
            if range::collide(fixes[i].range(), fixes[j].range()) {
                return Err(FixError::HasCollisionsInFixRanges);
            }
        }
    }

    let ordered: Vec<&Fix> = fixes
        .iter()
        .sorted_by_key(|fix| std::cmp::Reverse(fix.range().start))
        .collect();

    let normalized_source = source.replace("\r\n", "\n");
    let mut lines: Vec<String> = normalized_source.split('\n').map(str::to_owned).collect();

    for fix in ordered {
        lines = splice(lines, fix.range(), fix.replacement_text());
    }

    let result = lines.join("\n");

    if result == normalized_source {
        return Err(FixError::Unchanged);
    }

    match parser.parse(&result) {
        Ok(_) => Ok(result),
        Err(_) => Err(FixError::SourceCodeIsNotValid(result)),
    }
}

fn splice(lines: Vec<String>, range: Range, replacement: &str) -> Vec<String> {
    let start_row = range.start.row - 1;
    let end_row = range.end.row - 1;

    let lines_before = lines[..start_row].to_vec();
    let lines_after = lines[(end_row + 1).min(lines.len())..].to_vec();

    let start_line: Vec<char> = lines[start_row].chars().collect();
    let end_line: Vec<char> = lines[end_row].chars().collect();

    let prefix_end = (range.start.column - 1).min(start_line.len());
    let suffix_start = (range.end.column - 1).min(end_line.len());

    let prefix: String = start_line[..prefix_end].iter().collect();
    let suffix: String = end_line[suffix_start..].iter().collect();

    let spliced = format!("{prefix}{replacement}{suffix}");

    let mut result = lines_before;
    result.extend(spliced.split('\n').map(str::to_owned));
    result.extend(lines_after);
    result
}
