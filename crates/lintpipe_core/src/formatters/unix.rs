//! Unix formatter: `path:line:column: message [Severity/rule]`.

use std::fmt::Write;

use super::{Formatter, capitalized, pluralize, total_messages};
use crate::LintResult;

pub struct Unix;

impl Formatter for Unix {
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
                    "{}:{}:{}: {} [{}",
                    result.file_path.display(),
                    message.line,
                    message.column,
                    message.message,
                    kind
                );
                if let Some(rule) = &message.rule_id {
                    let _ = write!(output, "/{}", rule);
                }
                output.push_str("]\n");
            }
        }

        let total = total_messages(results);
        if total > 0 {
            let _ = write!(output, "\n{} {}", total, pluralize("problem", total));
        }

        output
    }
}
