//! Issue types for lint results.
//!
//! A rule produces a [`Violation`] for one file. The driver binds it to the
//! file path and source line, giving an [`Issue`] that reporters and actions
//! can consume without going back to the file.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::fix::TextEdit;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    EmptyLineAfterSigil,
    ParseError,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::EmptyLineAfterSigil => "empty-line-after-sigil",
            RuleId::ParseError => "parse-error",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================
// Violation (rule output)
// ============================================================

/// A rule violation inside one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleId,
    /// 1-based line the violation is anchored at.
    pub line: usize,
    /// 0-based column.
    pub col: usize,
    pub message: String,
    /// Edit that resolves the violation.
    pub edit: TextEdit,
}

// ============================================================
// Issue Types
// ============================================================

/// Location of an issue in a source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A violation bound to its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationIssue {
    pub location: SourceLocation,
    pub rule: RuleId,
    pub message: String,
    /// Text of the offending line, for context display.
    pub source_line: Option<String>,
    pub edit: TextEdit,
}

impl ViolationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn from_violation(file_path: &str, violation: Violation, source_line: Option<&str>) -> Self {
        Self {
            location: SourceLocation::new(file_path, violation.line, violation.col),
            rule: violation.rule,
            message: violation.message,
            source_line: source_line.map(str::to_string),
            edit: violation.edit,
        }
    }
}

/// A file that could not be read or decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> RuleId {
        RuleId::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while linting.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Violation(ViolationIssue),
    ParseError(ParseErrorIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn file_path(&self) -> &str;

    /// 1-based line, `None` for file-level issues.
    fn line(&self) -> Option<usize>;

    /// 0-based column, `None` for file-level issues.
    fn col(&self) -> Option<usize>;

    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> RuleId;

    fn source_line(&self) -> Option<&str> {
        None
    }

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for ViolationIssue {
    fn file_path(&self) -> &str {
        &self.location.file_path
    }

    fn line(&self) -> Option<usize> {
        Some(self.location.line)
    }

    fn col(&self) -> Option<usize> {
        Some(self.location.col)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> RuleId {
        self.rule
    }

    fn source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }

    fn hint(&self) -> Option<&str> {
        Some("run `sigil fix --apply` to correct it")
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn line(&self) -> Option<usize> {
        None
    }

    fn col(&self) -> Option<usize> {
        None
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> RuleId {
        Self::rule()
    }
}

/// Order issues by file, then line, then rule.
pub fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    a.file_path()
        .cmp(b.file_path())
        .then_with(|| a.line().cmp(&b.line()))
        .then_with(|| a.col().cmp(&b.col()))
        .then_with(|| a.report_rule().cmp(&b.report_rule()))
}
