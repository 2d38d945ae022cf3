//! Blank line required after the type sigil.
//!
//! ```ruby
//! # bad
//! # typed: true
//! # Some documentation for Person
//! class Person
//! end
//!
//! # good
//! # typed: true
//!
//! # Some documentation for Person
//! class Person
//! end
//! ```
//!
//! Magic comments may sit directly under the sigil: they form a pragma block
//! right above the code and the sigil is looked up *through* that block.

use crate::core::{Comment, CommentKind, DirectiveSet, SourceFile};
use crate::fix::TextEdit;
use crate::issues::{RuleId, Violation};

use super::Rule;

pub const MESSAGE: &str = "Add an empty line after the type sigil.";

#[derive(Debug, Clone, Default)]
pub struct EmptyLineAfterSigil {
    directives: DirectiveSet,
}

impl EmptyLineAfterSigil {
    pub fn new(directives: DirectiveSet) -> Self {
        Self { directives }
    }
}

impl Rule for EmptyLineAfterSigil {
    fn id(&self) -> RuleId {
        RuleId::EmptyLineAfterSigil
    }

    fn detect(&self, file: &SourceFile) -> Option<Violation> {
        let sigil = find_active_sigil(&file.comments, file.first_code_line, &self.directives);
        check_placement(sigil, file)
    }
}

/// Find the sigil whose placement must be checked.
///
/// Walks the header backward from the first code line. Plain comments are
/// skipped, the first sigil found wins, and a magic comment ends the search.
/// Files without code never have an active sigil.
pub fn find_active_sigil<'a>(
    comments: &'a [Comment],
    first_code_line: Option<usize>,
    directives: &DirectiveSet,
) -> Option<&'a Comment> {
    let first_code_line = first_code_line?;
    let mut cursor = comments.partition_point(|comment| comment.line < first_code_line);

    while cursor > 0 {
        cursor -= 1;
        let comment = &comments[cursor];
        match comment.kind(directives) {
            CommentKind::Directive => return None,
            CommentKind::Annotation => return Some(comment),
            CommentKind::Plain => {}
        }
    }

    None
}

/// Check that the line after `sigil` is blank.
///
/// A sigil on the last line, or line data that does not fit the file,
/// yields no violation.
pub fn check_placement(sigil: Option<&Comment>, file: &SourceFile) -> Option<Violation> {
    let next = sigil?.line.checked_add(1)?;
    let next_line = file.line(next)?;
    if next_line.trim().is_empty() {
        return None;
    }

    let offset = file.line_start(next)?;
    Some(Violation {
        rule: RuleId::EmptyLineAfterSigil,
        line: next,
        col: 0,
        message: MESSAGE.to_string(),
        edit: TextEdit::insert(offset, "\n"),
    })
}
