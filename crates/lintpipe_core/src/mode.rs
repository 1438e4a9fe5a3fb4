//! Mode selection.

use crate::path_mode::PathRunner;
use crate::pipeline::Transform;
use crate::report::ReportSink;
use crate::stream_mode::StreamRunner;
use crate::{Configuration, LintEngine, PipelineError, StreamItem};

/// The runner chosen for one invocation.
pub enum Mode<E> {
    /// Target globs were given: the engine scans the filesystem.
    Path(PathRunner<E>),
    /// No target: lint the items flowing through the pipeline.
    Stream(StreamRunner<E>),
}

/// Picks Path Mode when `config` names target globs, Stream Mode otherwise.
pub fn select_mode<E: LintEngine>(config: Configuration, engine: E) -> Mode<E> {
    if config.target_globs.is_empty() {
        Mode::Stream(StreamRunner::new(config, engine))
    } else {
        Mode::Path(PathRunner::new(config, engine))
    }
}

impl<E: LintEngine> Mode<E> {
    /// Sends printed reports to `sink` instead of stdout.
    pub fn with_sink(self, sink: impl ReportSink + 'static) -> Self {
        match self {
            Mode::Path(runner) => Mode::Path(runner.with_sink(sink)),
            Mode::Stream(runner) => Mode::Stream(runner.with_sink(sink)),
        }
    }

    pub fn is_path_mode(&self) -> bool {
        matches!(self, Mode::Path(_))
    }

    pub fn config(&self) -> &Configuration {
        match self {
            Mode::Path(runner) => runner.config(),
            Mode::Stream(runner) => runner.config(),
        }
    }
}

impl<E: LintEngine> Transform for Mode<E> {
    fn transform(&mut self, item: StreamItem) -> Result<Option<StreamItem>, PipelineError> {
        match self {
            Mode::Path(runner) => runner.transform(item),
            Mode::Stream(runner) => runner.transform(item),
        }
    }

    fn flush(&mut self) -> Result<(), PipelineError> {
        match self {
            Mode::Path(runner) => runner.flush(),
            Mode::Stream(runner) => runner.flush(),
        }
    }
}
