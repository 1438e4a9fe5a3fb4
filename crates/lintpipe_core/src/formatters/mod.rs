//! Built-in report formatters.
//!
//! Engines resolve formatter names through [`LintEngine::load_formatter`],
//! whose default implementation delegates to [`load`].
//!
//! [`LintEngine::load_formatter`]: crate::LintEngine::load_formatter

mod compact;
mod json;
mod sarif;
mod stylish;
mod unix;

pub use compact::Compact;
pub use json::Json;
pub use sarif::{Sarif, generate_sarif};
pub use stylish::Stylish;
pub use unix::Unix;

use crate::{EngineError, LintResult, Severity};

/// Turns a set of results into report text.
pub trait Formatter {
    fn format(&self, results: &[&LintResult]) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&[&LintResult]) -> String,
{
    fn format(&self, results: &[&LintResult]) -> String {
        self(results)
    }
}

/// Names accepted by [`load`].
pub const BUILTIN_FORMATTERS: &[&str] = &["stylish", "compact", "unix", "json", "sarif"];

/// Looks up a built-in formatter by name.
pub fn load(name: &str) -> Result<Box<dyn Formatter>, EngineError> {
    match name {
        "stylish" => Ok(Box::new(Stylish)),
        "compact" => Ok(Box::new(Compact)),
        "unix" => Ok(Box::new(Unix)),
        "json" => Ok(Box::new(Json)),
        "sarif" => Ok(Box::new(Sarif)),
        other => Err(EngineError::UnknownFormatter(other.to_string())),
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn capitalized(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Error",
        Severity::Warning => "Warning",
    }
}

fn total_messages(results: &[&LintResult]) -> usize {
    results.iter().map(|r| r.messages.len()).sum()
}
