//! Compact formatter: one line per finding.

use std::fmt::Write;

use super::{Formatter, capitalized, pluralize, total_messages};
use crate::LintResult;

pub struct Compact;

impl Formatter for Compact {
    fn format(&self, results: &[&LintResult]) -> String {
        let mut output = String::new();

        for result in results {
            for message in &result.messages {
                let kind = if message.fatal {
                    "Error"
                } else {
                    capitalized(message.severity)
                };
                let _ = write!(
                    output,
                    "{}: line {}, col {}, {} - {}",
                    result.file_path.display(),
                    message.line,
                    message.column,
                    kind,
                    message.message
                );
                if let Some(rule) = &message.rule_id {
                    let _ = write!(output, " ({})", rule);
                }
                output.push('\n');
            }
        }

        let total = total_messages(results);
        if total > 0 {
            let _ = write!(output, "\n{} {}", total, pluralize("problem", total));
        }

        output
    }
}
