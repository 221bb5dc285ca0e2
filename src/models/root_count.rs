// src/models/root_count.rs
use std::fmt;
use std::path::PathBuf;

/// Number of manual pages found under one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootCount {
    pub root: PathBuf,
    pub files: u64,
}

impl RootCount {
    #[inline]
    #[must_use]
    pub const fn new(root: PathBuf, files: u64) -> Self {
        Self { root, files }
    }
}

impl fmt::Display for RootCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} contains {} files.", self.root.display(), self.files)
    }
}
