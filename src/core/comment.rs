//! Comment records collected from the leading header of a Ruby file.
//!
//! Every header comment falls into exactly one [`CommentKind`]:
//! - `Directive`: a magic comment recognized by the [`DirectiveSet`]
//!   (`# frozen_string_literal: true`, `# encoding: utf-8`, ...)
//! - `Annotation`: a Sorbet type sigil (`# typed: strict`)
//! - `Plain`: anything else (documentation, shebang, `=begin` blocks)

use super::directive::DirectiveSet;

/// Prefix that marks a type sigil once the `#` marker is stripped.
pub const SIGIL_PREFIX: &str = "typed:";

/// A single comment in the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text including the leading `#`, surrounding whitespace trimmed.
    pub text: String,
    /// 1-based line number.
    pub line: usize,
}

impl Comment {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    /// Comment content with the `#` marker and surrounding whitespace removed.
    pub fn content(&self) -> &str {
        strip_marker(&self.text)
    }

    pub fn kind(&self, directives: &DirectiveSet) -> CommentKind {
        CommentKind::classify(self, directives)
    }
}

/// Classification of a header comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Directive,
    Annotation,
    Plain,
}

impl CommentKind {
    /// Classify a comment. The directive test runs first, so a comment that
    /// also looks like a sigil is still a directive.
    pub fn classify(comment: &Comment, directives: &DirectiveSet) -> Self {
        let content = comment.content();
        if directives.matches(content) {
            CommentKind::Directive
        } else if is_sigil(content) {
            CommentKind::Annotation
        } else {
            CommentKind::Plain
        }
    }
}

/// Check whether stripped comment content is a type sigil.
///
/// The sigil value is not validated: `typed: true`, `typed: strict` and
/// `typed: whatever` all qualify.
pub fn is_sigil(content: &str) -> bool {
    content.starts_with(SIGIL_PREFIX)
}

/// Remove one leading `#` marker and trim whitespace.
pub fn strip_marker(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix('#').unwrap_or(text).trim()
}
