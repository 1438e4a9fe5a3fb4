//! Error types.

use thiserror::Error;

/// Errors raised by a linting engine.
///
/// These propagate unchanged; nothing in this crate retries or recovers.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error (bad options, unreadable config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The engine process could not be run or exited abnormally.
    #[error("Engine process error: {0}")]
    Process(String),

    /// The engine produced output that could not be understood.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No formatter is registered under the requested name.
    #[error("Unknown formatter: {0}")]
    UnknownFormatter(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a process error.
    pub fn process(message: impl Into<String>) -> Self {
        Self::Process(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Raised when unresolved findings remain and the run is configured to fail.
///
/// Displays exactly the normalized report text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text}")]
pub struct ReportingError {
    pub text: String,
}

impl ReportingError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Anything that can stop a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Reporting(#[from] ReportingError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl PipelineError {
    /// Returns the reporting error, if this is one.
    pub fn as_reporting(&self) -> Option<&ReportingError> {
        match self {
            Self::Reporting(e) => Some(e),
            Self::Engine(_) => None,
        }
    }
}
