//! Autocorrect action.
//!
//! Runs the autocorrect loop over every scanned file and produces one
//! rewrite per file that changed. Used by the `sigil fix` command.

use rayon::prelude::*;

use super::operation::Operation;
use super::traits::Action;
use crate::core::SourceFile;
use crate::fix::autocorrect;
use crate::rules::RuleRegistry;

pub struct Autocorrect<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> Autocorrect<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }
}

impl Action<SourceFile> for Autocorrect<'_> {
    fn to_operations(&self, files: &[SourceFile]) -> Vec<Operation> {
        let registry = self.registry;
        files
            .par_iter()
            .filter_map(|file| {
                let result = autocorrect(registry, file);
                result.is_changed().then(|| Operation::RewriteFile {
                    file_path: file.path.clone(),
                    original: file.content.clone(),
                    content: result.content,
                    corrections: result.corrections,
                })
            })
            .collect()
    }
}
