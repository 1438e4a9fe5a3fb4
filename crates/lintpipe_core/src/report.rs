//! Result reporting: which results count as unresolved, how they are turned
//! into text, and whether that text fails the run or is printed.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::formatters::Formatter;
use crate::{LintResult, ReportingError};

/// Results the engine produced no fixed `output` for.
pub fn unresolved(results: &[LintResult]) -> Vec<&LintResult> {
    results.iter().filter(|r| !r.is_resolved()).collect()
}

/// Trims surrounding whitespace and collapses runs of three or more newlines
/// to exactly two. All-whitespace input becomes the empty string.
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut newlines = 0;

    for ch in trimmed.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines > 2 {
                continue;
            }
        } else {
            newlines = 0;
        }
        out.push(ch);
    }

    out
}

/// Formats unresolved results with a pluggable formatter.
pub struct Reporter {
    formatter: Box<dyn Formatter>,
}

impl Reporter {
    pub fn new(formatter: Box<dyn Formatter>) -> Self {
        Self { formatter }
    }

    /// Normalized report text for the unresolved subset of `results`.
    /// Empty means there is nothing to report.
    pub fn report(&self, results: &[LintResult]) -> String {
        let pending = unresolved(results);
        normalize(&self.formatter.format(&pending))
    }
}

/// Decides what happens to report text.
///
/// Empty text is a silent pass. Otherwise the text becomes a
/// [`ReportingError`] when `fail_on_unresolved` is set, or is emitted to `sink`.
pub fn settle(
    text: &str,
    fail_on_unresolved: bool,
    sink: &dyn ReportSink,
) -> Result<(), ReportingError> {
    if text.is_empty() {
        return Ok(());
    }
    if fail_on_unresolved {
        return Err(ReportingError::new(text));
    }
    sink.emit(text);
    Ok(())
}

/// Destination for printed reports.
pub trait ReportSink {
    fn emit(&self, text: &str);
}

/// Prints reports to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, text: &str) {
        println!("{}", text);
    }
}

/// Collects reports in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports emitted so far, in order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, text: &str) {
        self.entries.lock().push(text.to_string());
    }
}
