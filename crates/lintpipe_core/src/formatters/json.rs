//! JSON formatter: the results as an array.

use super::Formatter;
use crate::LintResult;

pub struct Json;

impl Formatter for Json {
    fn format(&self, results: &[&LintResult]) -> String {
        serde_json::to_string(results).unwrap_or_default()
    }
}
