// src/core/scanner.rs
use anyhow::Result;
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::utils::is_hidden;

#[cfg(test)]
pub mod test_utils;

/// Walks one root and hands every manual page file to `visit`.
///
/// Only regular files exactly two levels down are visited: files directly in
/// `root` and anything nested deeper than `root/<section>/` are skipped, as
/// are dot entries. Symbolic links are followed, so a link to a regular file
/// counts as a file and a linked section directory is entered.
///
/// Entries come back in directory listing order, which is not sorted and
/// differs between filesystems.
///
/// # Arguments
///
/// * `root` - The root directory to walk
/// * `visit` - Called once per file found
///
/// # Returns
///
/// * `Ok(u64)` - The number of files visited under this root
///
/// # Errors
///
/// Only errors returned by `visit` are propagated. A missing root yields zero
/// files; unreadable directories and dangling links are logged and skipped.
#[inline]
pub fn walk_root<F>(root: &Path, mut visit: F) -> Result<u64>
where
    F: FnMut(&Path) -> Result<()>,
{
    let mut count: u64 = 0;

    for entry in WalkDir::new(root)
        .follow_links(true)
        .min_depth(2)
        .max_depth(2)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_missing_root(&err) => {
                debug!(root = %root.display(), "man directory does not exist");
                return Ok(0);
            }
            Err(err) => {
                warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || is_hidden(&entry, root) {
            continue;
        }

        visit(entry.path())?;
        count = count.saturating_add(1);
    }

    debug!(root = %root.display(), files = count, "finished walking man directory");
    Ok(count)
}

fn is_missing_root(err: &walkdir::Error) -> bool {
    err.depth() == 0
        && err
            .io_error()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}
