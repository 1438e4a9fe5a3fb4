//! Stream Mode: lint each item's in-memory contents as it arrives.
//!
//! An item is forwarded only when the engine fixed it completely: fixed output
//! exists, no findings remain, and the output differs from what came in.
//! Every other item is dropped. Only results without fixed output are
//! reported; a partial fix is logged and dropped.

use tracing::{debug, warn};

use crate::pipeline::Transform;
use crate::report::{self, ReportSink, Reporter, StdoutSink};
use crate::{Configuration, LintEngine, LintResult, PipelineError, StreamItem};

pub struct StreamRunner<E> {
    config: Configuration,
    engine: E,
    reporter: Option<Reporter>,
    sink: Box<dyn ReportSink>,
}

impl<E: LintEngine> StreamRunner<E> {
    pub fn new(config: Configuration, engine: E) -> Self {
        Self {
            config,
            engine,
            reporter: None,
            sink: Box::new(StdoutSink),
        }
    }

    /// Sends printed reports to `sink` instead of stdout.
    pub fn with_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Lints one item. Returns the item (with fixed contents) when it should
    /// be forwarded, `None` when it is dropped.
    pub fn process(&mut self, mut item: StreamItem) -> Result<Option<StreamItem>, PipelineError> {
        let relative = item.relative_to(&self.config.cwd);

        if self.engine.is_path_ignored(&relative)? {
            debug!("Dropping ignored file {}", relative.display());
            return Ok(None);
        }

        let results = self.engine.lint_text(&item.text(), &relative)?;

        if self.config.fix_enabled()
            && let Some(result) = results.first()
            && let Some(output) = &result.output
        {
            if result.messages.is_empty() {
                if output.as_bytes() != item.contents.as_slice() {
                    debug!("Forwarding fixed {}", relative.display());
                    item.contents = output.clone().into_bytes();
                    return Ok(Some(item));
                }
            } else {
                warn!(
                    "{} finding(s) remain in {} after one fix pass",
                    result.messages.len(),
                    relative.display()
                );
            }
        }

        self.report(&results)?;
        debug!("Dropping {}", relative.display());
        Ok(None)
    }

    fn report(&mut self, results: &[LintResult]) -> Result<(), PipelineError> {
        let reporter = match self.reporter.take() {
            Some(reporter) => reporter,
            None => Reporter::new(self.engine.load_formatter(&self.config.formatter)?),
        };
        let text = reporter.report(results);
        self.reporter = Some(reporter);

        report::settle(&text, self.config.fail_on_unresolved, self.sink.as_ref())?;
        Ok(())
    }
}

impl<E: LintEngine> Transform for StreamRunner<E> {
    fn transform(&mut self, item: StreamItem) -> Result<Option<StreamItem>, PipelineError> {
        self.process(item)
    }
}
