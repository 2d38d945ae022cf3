//! Fix command - Insert the missing blank line after type sigils.
//!
//! Use `--apply` to actually rewrite files (default is dry-run mode).

use anyhow::Result;

use super::super::{
    actions::{Action, Autocorrect},
    args::{FixCommand, OutputFormat},
};
use super::{CommandKind, CommandResult, CommandSummary, FixSummary};
use crate::{core::CheckContext, issues::Issue};

pub fn fix(cmd: FixCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let sources = ctx.sources();
    let action = Autocorrect::new(ctx.registry());

    // Dry-run keeps the operations for the preview; apply reports what was written.
    let (operations, correction_count, file_count) = if apply {
        let stats = action.run(&sources.files)?;
        (Vec::new(), stats.changes_applied, stats.files_modified)
    } else {
        let operations = action.to_operations(&sources.files);
        let correction_count = operations.iter().map(|op| op.correction_count()).sum();
        let file_count = operations.len();
        (operations, correction_count, file_count)
    };

    Ok(CommandResult {
        kind: CommandKind::Fix,
        summary: CommandSummary::Fix(FixSummary {
            is_apply: apply,
            operations,
            correction_count,
            file_count,
        }),
        issues: sources
            .errors
            .iter()
            .cloned()
            .map(Issue::ParseError)
            .collect(),
        violation_count: correction_count,
        parse_error_count: sources.errors.len(),
        files_checked: ctx.files.len(),
        format: OutputFormat::Text,
    })
}
