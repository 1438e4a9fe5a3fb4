//! Path Mode: the engine scans the filesystem by glob once the pipeline ends.
//!
//! Pipeline items only carry the run; they pass through untouched. Fixes are
//! applied in a single pass and never retried. Only results without fixed
//! output are reported, so findings left in a partially fixed file are not.

use tracing::info;

use crate::pipeline::Transform;
use crate::report::{self, ReportSink, Reporter, StdoutSink};
use crate::{Configuration, LintEngine, PipelineError, StreamItem};

pub struct PathRunner<E> {
    config: Configuration,
    engine: E,
    sink: Box<dyn ReportSink>,
}

impl<E: LintEngine> PathRunner<E> {
    pub fn new(config: Configuration, engine: E) -> Self {
        Self {
            config,
            engine,
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

    /// Lints the target globs, applies fixes, and reports what is left.
    pub fn scan(&mut self) -> Result<(), PipelineError> {
        info!(
            "Linting {} from {}",
            self.config.target_globs.join(", "),
            self.config.cwd.display()
        );
        let results = self
            .engine
            .lint_paths(&self.config.target_globs, &self.config.cwd)?;

        if self.config.fix_enabled() {
            self.engine.apply_fixes_to_disk(&results)?;
        }

        let reporter = Reporter::new(self.engine.load_formatter(&self.config.formatter)?);
        let text = reporter.report(&results);
        report::settle(&text, self.config.fail_on_unresolved, self.sink.as_ref())?;
        Ok(())
    }
}

impl<E: LintEngine> Transform for PathRunner<E> {
    fn transform(&mut self, item: StreamItem) -> Result<Option<StreamItem>, PipelineError> {
        Ok(Some(item))
    }

    fn flush(&mut self) -> Result<(), PipelineError> {
        self.scan()
    }
}
