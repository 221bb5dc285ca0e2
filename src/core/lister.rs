// src/core/lister.rs
use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::debug;

use crate::core::scanner::walk_root;
use crate::models::{ManRoot, OutputMode, RootCount};
use crate::utils::base_name;

/// Walks every root in order and writes the result for `mode` to `out`.
///
/// Path and Name output is written while walking, so lines for the base root
/// come before lines for the fish root. Count output is written once all
/// roots have been walked, one summary line per root.
///
/// # Arguments
///
/// * `roots` - The roots to walk, in output order
/// * `mode` - What to print
/// * `out` - Where to print it
///
/// # Returns
///
/// * `Ok(Vec<RootCount>)` - The file count of every root, in `roots` order
///
/// # Errors
///
/// This function returns an error if writing to `out` fails.
#[inline]
pub fn list_man_pages<W: Write>(
    roots: &[ManRoot],
    mode: OutputMode,
    out: &mut W,
) -> Result<Vec<RootCount>> {
    let mut counts = Vec::with_capacity(roots.len());

    for root in roots {
        debug!(root = %root.path().display(), ?mode, "walking man directory");
        let files = walk_root(root.path(), |path| match mode {
            OutputMode::Path => writeln!(out, "{}", path.display())
                .context("Failed to write manual page path"),
            OutputMode::Name => writeln!(out, "{}", base_name(path))
                .context("Failed to write manual page name"),
            OutputMode::Count => Ok(()),
        })?;
        counts.push(RootCount::new(root.path().to_path_buf(), files));
    }

    if mode == OutputMode::Count {
        for count in &counts {
            writeln!(out, "{count}").context("Failed to write file count")?;
        }
    }

    Ok(counts)
}
