//! Rule implementations for sigil.
//!
//! A rule is a plain value implementing [`Rule`]. Rules are collected into a
//! [`RuleRegistry`] by composition and dispatched through [`RuleKind`] with
//! `enum_dispatch`.
//!
//! ## Module Structure
//!
//! - `empty_line_after_sigil`: blank line required after the type sigil

pub mod empty_line_after_sigil;

use enum_dispatch::enum_dispatch;

use crate::config::Config;
use crate::core::SourceFile;
use crate::fix::TextEdit;
use crate::issues::{RuleId, Violation};

pub use empty_line_after_sigil::EmptyLineAfterSigil;

/// Capability shared by every rule.
#[enum_dispatch]
pub trait Rule {
    fn id(&self) -> RuleId;

    /// Inspect one file. At most one violation per rule and file.
    fn detect(&self, file: &SourceFile) -> Option<Violation>;

    /// Edit that resolves a violation this rule produced.
    fn fix(&self, violation: &Violation) -> TextEdit {
        violation.edit.clone()
    }
}

#[enum_dispatch(Rule)]
#[derive(Debug, Clone)]
pub enum RuleKind {
    EmptyLineAfterSigil(EmptyLineAfterSigil),
}

/// The set of enabled rules.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<RuleKind>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::from_rules(vec![EmptyLineAfterSigil::default().into()])
    }
}

impl RuleRegistry {
    pub fn new(config: &Config) -> Self {
        Self::from_rules(vec![
            EmptyLineAfterSigil::new(config.directive_set()).into(),
        ])
    }

    pub fn from_rules(rules: Vec<RuleKind>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RuleKind] {
        &self.rules
    }

    pub fn get(&self, id: RuleId) -> Option<&RuleKind> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Run every rule on the file.
    pub fn detect(&self, file: &SourceFile) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.detect(file))
            .collect()
    }
}
