//! Writing forwarded items back to disk.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use lintpipe_core::StreamItem;
use tracing::debug;

/// Where forwarded items end up.
pub struct Destination {
    out_dir: Option<PathBuf>,
    cwd: PathBuf,
}

impl Destination {
    /// In place when `out_dir` is `None`, otherwise mirrored under `out_dir`
    /// relative to `cwd`.
    pub fn new(out_dir: Option<PathBuf>, cwd: &Path) -> Self {
        Self {
            out_dir: out_dir.map(|dir| cwd.join(dir)),
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn target(&self, item: &StreamItem) -> PathBuf {
        let Some(out_dir) = &self.out_dir else {
            return item.path.clone();
        };

        let relative = item.relative_to(&self.cwd);
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if escapes {
            // keep it inside out_dir
            match item.path.file_name() {
                Some(name) => out_dir.join(name),
                None => out_dir.join(relative),
            }
        } else {
            out_dir.join(relative)
        }
    }

    pub fn write(&self, item: &StreamItem) -> io::Result<PathBuf> {
        let target = self.target(item);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &item.contents)?;
        debug!("Wrote {}", target.display());
        Ok(target)
    }
}
