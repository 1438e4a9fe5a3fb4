//! # lintpipe_core
//!
//! Runs a linting/autofixing engine from inside a file pipeline.
//!
//! This crate provides:
//! - Option resolution into an immutable [`Configuration`]
//! - Mode selection between Path Mode and Stream Mode
//! - The two runners and the reporting policy they share
//! - The [`LintEngine`] contract an engine has to fulfil
//! - Built-in report formatters
//!
//! ## Example
//!
//! ```rust,ignore
//! use lintpipe_core::{Options, StreamItem, pipeline, select_mode};
//!
//! let config = Options::default().resolve();
//! let engine = MyEngine::new(&config.engine)?;
//! let mut mode = select_mode(config, engine);
//!
//! let fixed = pipeline::run(&mut mode, [StreamItem::read("src/a.js")?])?;
//! ```

mod config;
mod engine;
mod error;
pub mod fix;
pub mod formatters;
mod item;
mod mode;
pub mod path_mode;
pub mod pipeline;
pub mod report;
mod result;
pub mod stream_mode;

pub use config::{
    ConfigInput, ConfigSource, Configuration, DEFAULT_CACHE_DIR, DEFAULT_FORMATTER,
    EngineOptions, EngineOverrides, FilesInput, FixType, Options,
};
pub use engine::LintEngine;
pub use error::{EngineError, PipelineError, ReportingError};
pub use formatters::Formatter;
pub use item::StreamItem;
pub use mode::{Mode, select_mode};
pub use pipeline::Transform;
pub use report::{MemorySink, ReportSink, Reporter, StdoutSink};
pub use result::{FindingFix, LintFinding, LintResult, Severity};

#[cfg(test)]
pub mod test_utils;
