// src/models/man_root.rs
use std::path::{Path, PathBuf};

/// A top-level directory scanned for manual pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManRoot {
    path: PathBuf,
}

impl ManRoot {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
