//! lintpipe CLI
//!
//! Lints files through ESLint either by letting ESLint scan globs (Path Mode)
//! or by feeding it the given files one by one (Stream Mode).

mod cli;
mod options;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use lintpipe_core::{PipelineError, StreamItem, pipeline, select_mode};
use lintpipe_eslint::EslintCommand;
use miette::{IntoDiagnostic, Result, WrapErr};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::output::Destination;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Failed to write fixed file: {0}")]
    Write(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(failed) => {
            if failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns `true` when unresolved findings failed the run.
fn run(cli: Cli) -> Result<bool> {
    let cwd = std::env::current_dir().into_diagnostic()?;

    let options = options::load(cli.config.as_deref(), &cwd)?;
    let config = options::apply_overrides(options, &cli).resolve_in(&cwd);

    let mut engine = EslintCommand::new(&config.engine).into_diagnostic()?;
    if let Some(program) = &cli.eslint_bin {
        engine = engine.with_program(program);
    }

    let destination = Destination::new(cli.out_dir.clone(), &cwd);
    let passthrough_only = !config.target_globs.is_empty() && cli.out_dir.is_none();
    let mut mode = select_mode(config, engine);

    if !mode.is_path_mode() && cli.paths.is_empty() {
        info!("No files given");
        return Ok(false);
    }

    let items = cli
        .paths
        .iter()
        .map(|path| {
            StreamItem::read(cwd.join(path))
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut written = 0usize;
    let outcome = pipeline::run_with(&mut mode, items, |item| {
        // Path Mode items come back unchanged
        if !passthrough_only {
            destination.write(&item)?;
            written += 1;
        }
        Ok::<_, RunError>(())
    });

    if written > 0 {
        info!("Wrote {} file(s)", written);
    }

    match outcome {
        Ok(()) => Ok(false),
        Err(RunError::Pipeline(PipelineError::Reporting(report))) => {
            println!("{}", report.text);
            Ok(true)
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}
