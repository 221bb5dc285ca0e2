// src/core/roots.rs
use std::path::Path;

use crate::models::ManRoot;

/// Base manual directory, relative to the parent of the home directory.
pub const BASE_MAN_DIR: &str = "usr/share/man";

/// Manual pages shipped with the fish shell, same anchor as [`BASE_MAN_DIR`].
pub const FISH_MAN_DIR: &str = "usr/share/fish/man";

/// Builds the ordered set of roots to scan.
///
/// The base root `<home>/../usr/share/man` always comes first; the fish root
/// follows when `include_fish` is set. Paths are joined as-is and never
/// canonicalised.
#[inline]
#[must_use]
pub fn resolve_roots(home: &Path, include_fish: bool) -> Vec<ManRoot> {
    let anchor = home.join("..");
    let mut roots = vec![ManRoot::new(anchor.join(BASE_MAN_DIR))];
    if include_fish {
        roots.push(ManRoot::new(anchor.join(FISH_MAN_DIR)));
    }
    roots
}
