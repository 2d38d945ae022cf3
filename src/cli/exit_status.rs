use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, nothing to report
/// - `Failure` (1): Command completed but found violations (or, in dry-run, pending fixes)
/// - `Error` (2): Command failed due to internal error, or a file could not be read
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no issues found.
    Success,
    /// Command completed but found issues.
    Failure,
    /// Command failed due to internal error (config error, unreadable file, etc.).
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.parse_error_count > 0 {
            return ExitStatus::Error;
        }
        let has_work = match &result.summary {
            CommandSummary::Check => result.violation_count > 0,
            CommandSummary::Fix(summary) => !summary.is_apply && summary.correction_count > 0,
            CommandSummary::Init(_) => false,
        };
        if has_work {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
