//! Sigil - blank-line linter for Sorbet type sigils
//!
//! Sigil checks Ruby sources for a `# typed:` sigil comment that sits directly
//! on top of code, and can insert the missing blank line automatically.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, actions, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Comment classification, header scanning and file discovery
//! - `fix`: Text edits and the autocorrect loop
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Lint rules and the rule registry
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod fix;
pub mod issues;
pub mod rules;
pub mod utils;
