// src/models/output_mode.rs

/// What gets printed for each manual page found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full path of every file, one per line.
    #[default]
    Path,
    /// Base name of every file, one per line.
    Name,
    /// Nothing per file; one summary line per root once the walk is done.
    Count,
}

impl OutputMode {
    /// Picks the mode from the command line switches.
    ///
    /// Priority is Count > Name > Path: `--count` wins over `--names`, and
    /// with neither switch every file path is printed.
    #[inline]
    #[must_use]
    pub const fn from_flags(count: bool, names: bool) -> Self {
        match (count, names) {
            (true, _) => Self::Count,
            (false, true) => Self::Name,
            (false, false) => Self::Path,
        }
    }
}
