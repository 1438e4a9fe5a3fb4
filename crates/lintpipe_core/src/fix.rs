//! Writing engine-computed fixes back to disk.

use std::fs;

use tracing::{debug, info};

use crate::{EngineError, LintResult};

/// Writes every result's fixed output over its source file.
///
/// Results without output are skipped. Files are written one at a time with no
/// rollback: a failure part way leaves earlier files fixed.
pub fn output_fixes(results: &[LintResult]) -> Result<usize, EngineError> {
    let mut written = 0;
    for result in results {
        let Some(output) = &result.output else {
            continue;
        };
        debug!("Writing fixes to {}", result.file_path.display());
        fs::write(&result.file_path, output)?;
        written += 1;
    }

    if written > 0 {
        info!("Applied fixes to {} file(s)", written);
    }
    Ok(written)
}
