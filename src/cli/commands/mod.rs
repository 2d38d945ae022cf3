pub mod check;
pub mod fix;
pub mod init;

use super::actions::Operation;
use super::args::OutputFormat;
use crate::issues::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Check,
    Fix,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Fix(FixSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct FixSummary {
    pub is_apply: bool,
    /// Pending rewrites, one per file. Empty with `--apply`.
    pub operations: Vec<Operation>,
    /// Number of corrections pending (dry-run) or applied.
    pub correction_count: usize,
    /// Number of files pending (dry-run) or modified.
    pub file_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running sigil commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// Issues found during the run: violations and parse errors for `check`,
    /// parse errors only for `fix`.
    pub issues: Vec<Issue>,
    /// Number of rule violations found.
    pub violation_count: usize,
    /// Number of files that could not be read.
    pub parse_error_count: usize,
    /// Number of Ruby files that were checked.
    pub files_checked: usize,
    pub format: OutputFormat,
}
