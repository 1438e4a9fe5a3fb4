//! SARIF (Static Analysis Results Interchange Format) output formatter.
//!
//! Implements the subset of SARIF 2.1.0 that code scanning dashboards read.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use super::Formatter;
use crate::{LintFinding, LintResult, Severity};

const SARIF_VERSION: &str = "2.1.0";

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

const TOOL_NAME: &str = "lintpipe";

pub struct Sarif;

impl Formatter for Sarif {
    fn format(&self, results: &[&LintResult]) -> String {
        generate_sarif(results).unwrap_or_default()
    }
}

/// Generates SARIF output from lint results.
pub fn generate_sarif(results: &[&LintResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SarifLog::from_results(results))
}

#[derive(Debug, Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

impl SarifLog {
    fn from_results(results: &[&LintResult]) -> Self {
        Self {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run::from_results(results)],
        }
    }
}

#[derive(Debug, Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

impl Run {
    fn from_results(lint_results: &[&LintResult]) -> Self {
        let mut results = Vec::new();
        // Sorted so the rule table is stable between runs.
        let mut rules: BTreeMap<String, ReportingDescriptor> = BTreeMap::new();

        for lint_result in lint_results {
            for finding in &lint_result.messages {
                results.push(SarifResult::from_finding(finding, &lint_result.file_path));

                if let Some(rule_id) = &finding.rule_id {
                    rules
                        .entry(rule_id.clone())
                        .or_insert_with(|| ReportingDescriptor::new(rule_id));
                }
            }
        }

        Self {
            tool: Tool {
                driver: ToolComponent {
                    name: TOOL_NAME,
                    version: option_env!("CARGO_PKG_VERSION"),
                    rules: rules.into_values().collect(),
                },
            },
            results,
        }
    }
}

#[derive(Debug, Serialize)]
struct Tool {
    driver: ToolComponent,
}

#[derive(Debug, Serialize)]
struct ToolComponent {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rules: Vec<ReportingDescriptor>,
}

#[derive(Debug, Serialize)]
struct ReportingDescriptor {
    id: String,
}

impl ReportingDescriptor {
    fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[derive(Debug, Serialize)]
struct Message {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_id: Option<String>,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

impl SarifResult {
    fn from_finding(finding: &LintFinding, path: &Path) -> Self {
        let level = match finding.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        Self {
            rule_id: finding.rule_id.clone(),
            level,
            message: Message {
                text: finding.message.clone(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: path.to_string_lossy().to_string(),
                    },
                    region: Region::from_finding(finding),
                },
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Debug, Serialize)]
struct ArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
    start_column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<usize>,
}

impl Region {
    fn from_finding(finding: &LintFinding) -> Self {
        Self {
            // SARIF lines and columns are 1-based; parse errors may report 0.
            start_line: finding.line.max(1),
            start_column: finding.column.max(1),
            end_line: finding.end_line,
            end_column: finding.end_column,
        }
    }
}
