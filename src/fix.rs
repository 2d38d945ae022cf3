//! Text edits and the autocorrect loop.
//!
//! Rules describe fixes as [`TextEdit`] insertions at byte offsets. The
//! autocorrect loop applies them, re-scans the corrected text and repeats
//! until no rule fires (bounded by [`MAX_AUTOCORRECT_PASSES`]).

use crate::core::SourceFile;
use crate::issues::Violation;
use crate::rules::{Rule, RuleRegistry};

/// Upper bound on detect/apply rounds for one file.
pub const MAX_AUTOCORRECT_PASSES: usize = 10;

/// Insert `insert` at byte `offset` of the file content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextEdit {
    pub offset: usize,
    pub insert: String,
}

impl TextEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            insert: text.into(),
        }
    }
}

/// Apply edits to raw file content.
///
/// Edits at the same offset keep their relative order. Edits that point
/// past the end of the content are dropped.
pub fn apply_edits(content: &[u8], edits: &[TextEdit]) -> Vec<u8> {
    let mut ordered: Vec<(usize, &TextEdit)> = edits
        .iter()
        .enumerate()
        .filter(|(_, edit)| edit.offset <= content.len())
        .collect();
    ordered.sort_by_key(|(idx, edit)| (edit.offset, *idx));

    let extra: usize = ordered.iter().map(|(_, edit)| edit.insert.len()).sum();
    let mut result = Vec::with_capacity(content.len() + extra);
    let mut cursor = 0;
    for (_, edit) in ordered {
        result.extend_from_slice(&content[cursor..edit.offset]);
        result.extend_from_slice(edit.insert.as_bytes());
        cursor = edit.offset;
    }
    result.extend_from_slice(&content[cursor..]);
    result
}

/// Outcome of autocorrecting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autocorrected {
    pub content: Vec<u8>,
    /// Violations that were corrected, in the order they were fixed.
    /// Line numbers refer to the content of the pass that found them.
    pub corrections: Vec<Violation>,
}

impl Autocorrected {
    pub fn is_changed(&self) -> bool {
        !self.corrections.is_empty()
    }
}

/// Repeatedly detect and fix violations in `file`.
pub fn autocorrect(registry: &RuleRegistry, file: &SourceFile) -> Autocorrected {
    let mut current = file.clone();
    let mut corrections = Vec::new();

    for _ in 0..MAX_AUTOCORRECT_PASSES {
        let violations = registry.detect(&current);
        if violations.is_empty() {
            break;
        }

        let edits: Vec<TextEdit> = violations
            .iter()
            .filter_map(|violation| {
                registry
                    .get(violation.rule)
                    .map(|rule| rule.fix(violation))
            })
            .collect();
        let content = apply_edits(&current.content, &edits);
        if content == current.content {
            break;
        }

        corrections.extend(violations);
        current = SourceFile::parse(current.path.clone(), content);
    }

    Autocorrected {
        content: current.content,
        corrections,
    }
}
