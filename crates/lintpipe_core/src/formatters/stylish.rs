//! Stylish formatter: one table per file followed by a problem summary.
//!
//! ```text
//! src/a.js
//!    1:5   error    'x' is not defined  no-undef
//!   12:10  warning  Unexpected var      no-var
//!
//! ✖ 2 problems (1 error, 1 warning)
//! ```

use std::fmt::Write;

use super::{Formatter, pluralize};
use crate::{LintResult, Severity};

pub struct Stylish;

impl Formatter for Stylish {
    fn format(&self, results: &[&LintResult]) -> String {
        let mut output = String::from("\n");
        let mut errors = 0;
        let mut warnings = 0;
        let mut fixable_errors = 0;
        let mut fixable_warnings = 0;

        for result in results {
            if result.messages.is_empty() {
                continue;
            }

            // counted from the messages; engine counters may be missing
            for m in &result.messages {
                if m.fatal || m.severity == Severity::Error {
                    errors += 1;
                    fixable_errors += usize::from(m.is_fixable());
                } else {
                    warnings += 1;
                    fixable_warnings += usize::from(m.is_fixable());
                }
            }

            let rows: Vec<[String; 5]> = result
                .messages
                .iter()
                .map(|m| {
                    let kind = if m.fatal {
                        "error"
                    } else {
                        m.severity.as_str()
                    };
                    [
                        m.line.to_string(),
                        m.column.to_string(),
                        kind.to_string(),
                        strip_trailing_period(&m.message).to_string(),
                        m.rule_id.clone().unwrap_or_default(),
                    ]
                })
                .collect();

            let mut widths = [0usize; 5];
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            let _ = writeln!(output, "{}", result.file_path.display());
            for [line, column, kind, message, rule] in &rows {
                let row = format!(
                    "  {:>lw$}:{:<cw$}  {:<kw$}  {:<mw$}  {}",
                    line,
                    column,
                    kind,
                    message,
                    rule,
                    lw = widths[0],
                    cw = widths[1],
                    kw = widths[2],
                    mw = widths[3],
                );
                let _ = writeln!(output, "{}", row.trim_end());
            }
            output.push('\n');
        }

        let total = errors + warnings;
        if total == 0 {
            return String::new();
        }

        let _ = writeln!(
            output,
            "\u{2716} {} {} ({} {}, {} {})",
            total,
            pluralize("problem", total),
            errors,
            pluralize("error", errors),
            warnings,
            pluralize("warning", warnings),
        );

        if fixable_errors > 0 || fixable_warnings > 0 {
            let _ = writeln!(
                output,
                "  {} {} and {} {} potentially fixable with the `--fix` option.",
                fixable_errors,
                pluralize("error", fixable_errors),
                fixable_warnings,
                pluralize("warning", fixable_warnings),
            );
        }

        output
    }
}

/// "Missing semicolon." -> "Missing semicolon", but leaves " ." alone.
fn strip_trailing_period(message: &str) -> &str {
    match message.strip_suffix('.') {
        Some(rest) if !rest.is_empty() && !rest.ends_with(' ') => rest,
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FindingFix, LintFinding};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_when_no_messages() {
        let clean = LintResult::new("a.js", Vec::new());
        assert_eq!(Stylish.format(&[&clean]), "");
        assert_eq!(Stylish.format(&[]), "");
    }

    #[test]
    fn aligns_columns_and_summarizes() {
        let result = LintResult::new(
            "src/a.js",
            vec![
                LintFinding::new("'x' is not defined.", 1, 5).with_rule("no-undef"),
                LintFinding::new("Unexpected var.", 12, 10)
                    .with_rule("no-var")
                    .with_severity(Severity::Warning),
            ],
        );

        let expected = "\n\
src/a.js\n   1:5   error    'x' is not defined  no-undef\n  12:10  warning  Unexpected var      no-var\n\
\n\
\u{2716} 2 problems (1 error, 1 warning)\n";

        assert_eq!(Stylish.format(&[&result]), expected);
    }

    #[test]
    fn mentions_fixable_counts() {
        let result = LintResult::new(
            "b.js",
            vec![
                LintFinding::new("Missing semicolon.", 1, 10)
                    .with_rule("semi")
                    .with_fix(FindingFix {
                        range: [9, 9],
                        text: ";".into(),
                    }),
            ],
        );

        let text = Stylish.format(&[&result]);
        assert!(text.contains("  1:10  error  Missing semicolon  semi\n"));
        assert!(text.contains("\u{2716} 1 problem (1 error, 0 warnings)\n"));
        assert!(
            text.contains("  1 error and 0 warnings potentially fixable with the `--fix` option.\n")
        );
    }

    #[test]
    fn summary_ignores_stale_counters() {
        let mut result = LintResult::new(
            "d.js",
            vec![LintFinding::new("'x' is not defined.", 1, 1).with_rule("no-undef")],
        );
        result.error_count = 0;

        let text = Stylish.format(&[&result]);
        assert!(text.contains("d.js\n  1:1  error  'x' is not defined  no-undef\n"));
        assert!(text.contains("\u{2716} 1 problem (1 error, 0 warnings)\n"));
    }

    #[test]
    fn parser_errors_have_no_rule() {
        let mut finding = LintFinding::new("Parsing error: Unexpected token", 3, 1);
        finding.fatal = true;
        let result = LintResult::new("c.js", vec![finding]);

        let text = Stylish.format(&[&result]);
        assert!(text.contains("c.js\n  3:1  error  Parsing error: Unexpected token\n"));
    }

    #[test]
    fn trailing_period() {
        assert_eq!(strip_trailing_period("Unexpected var."), "Unexpected var");
        assert_eq!(strip_trailing_period("Ends with space ."), "Ends with space .");
        assert_eq!(strip_trailing_period("."), ".");
        assert_eq!(strip_trailing_period("no period"), "no period");
    }
}
