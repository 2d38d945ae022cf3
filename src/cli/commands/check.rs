use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandKind, CommandResult, CommandSummary};
use crate::{core::CheckContext, issues::Issue};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let issues = ctx.check();
    let violation_count = issues
        .iter()
        .filter(|issue| matches!(issue, Issue::Violation(_)))
        .count();

    Ok(CommandResult {
        kind: CommandKind::Check,
        summary: CommandSummary::Check,
        violation_count,
        parse_error_count: ctx.parse_error_count(),
        files_checked: ctx.files.len(),
        format: args.format,
        issues,
    })
}
