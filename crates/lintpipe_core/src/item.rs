//! Items flowing through a pipeline.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One file in flight: where it came from and what it currently contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamItem {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl StreamItem {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Reads an item from disk.
    pub fn read(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let contents = fs::read(&path)?;
        Ok(Self { path, contents })
    }

    /// Contents as text. Invalid UTF-8 is replaced, never rejected.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.contents)
    }

    /// Path relative to `cwd`, falling back to the path as given.
    pub fn relative_to(&self, cwd: &Path) -> PathBuf {
        if self.path.is_relative() {
            return self.path.clone();
        }
        pathdiff::diff_paths(&self.path, cwd).unwrap_or_else(|| self.path.clone())
    }
}
