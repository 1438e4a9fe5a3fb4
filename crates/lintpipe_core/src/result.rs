//! Lint findings and per-file results as produced by the engine.
//!
//! The serialized shape follows ESLint's JSON report (camelCase keys,
//! numeric severities) so engine adapters can deserialize it directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Severity level for findings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// Warning - should be reviewed.
    Warning,
    /// Error - must be fixed.
    #[default]
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity {}", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

/// A text edit attached to a fixable finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingFix {
    /// Byte range `[start, end)` in the source.
    pub range: [usize; 2],
    /// Replacement text.
    pub text: String,
}

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintFinding {
    /// The rule that produced the finding. Absent for parser errors.
    #[serde(default)]
    pub rule_id: Option<String>,

    pub severity: Severity,

    pub message: String,

    /// 1-based line.
    #[serde(default)]
    pub line: usize,

    /// 1-based column.
    #[serde(default)]
    pub column: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,

    /// Set for fatal parse errors.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fatal: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<FindingFix>,
}

impl LintFinding {
    /// Creates an error-level finding at the given position.
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            rule_id: None,
            severity: Severity::Error,
            message: message.into(),
            line,
            column,
            end_line: None,
            end_column: None,
            fatal: false,
            fix: None,
        }
    }

    /// Sets the rule id.
    pub fn with_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attaches a fix.
    pub fn with_fix(mut self, fix: FindingFix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

/// Per-file aggregate of findings plus optional fixed output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub file_path: PathBuf,

    /// Findings that remain, in engine order.
    #[serde(default)]
    pub messages: Vec<LintFinding>,

    #[serde(default)]
    pub error_count: usize,

    #[serde(default)]
    pub warning_count: usize,

    #[serde(default)]
    pub fixable_error_count: usize,

    #[serde(default)]
    pub fixable_warning_count: usize,

    /// Source text with engine-applied fixes. Present only when the engine
    /// changed something.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LintResult {
    /// Builds a result and derives the counters from `messages`.
    pub fn new(file_path: impl Into<PathBuf>, messages: Vec<LintFinding>) -> Self {
        let mut result = Self {
            file_path: file_path.into(),
            messages: Vec::new(),
            error_count: 0,
            warning_count: 0,
            fixable_error_count: 0,
            fixable_warning_count: 0,
            output: None,
            source: None,
        };
        for finding in messages {
            match (finding.severity, finding.is_fixable()) {
                (Severity::Error, fixable) => {
                    result.error_count += 1;
                    result.fixable_error_count += usize::from(fixable);
                }
                (Severity::Warning, fixable) => {
                    result.warning_count += 1;
                    result.fixable_warning_count += usize::from(fixable);
                }
            }
            result.messages.push(finding);
        }
        result
    }

    /// Sets the fixed output.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// True when the engine produced fixed output. Findings left next to the
    /// output (a partial fix) do not make it unresolved.
    pub fn is_resolved(&self) -> bool {
        self.output.is_some()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
