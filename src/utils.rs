// src/utils.rs
use std::borrow::Cow;
use std::ffi::OsStr;
use std::io;
use std::path::Path;

/// Whether any component of `entry` below `root` starts with a dot.
///
/// Shell globs skip dot entries, so hidden section directories and hidden
/// files are never reported.
pub fn is_hidden(entry: &walkdir::DirEntry, root: &Path) -> bool {
    entry.path().strip_prefix(root).is_ok_and(|relative| {
        relative
            .components()
            .any(|component| starts_with_dot(component.as_os_str()))
    })
}

fn starts_with_dot(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// The final path component, or the whole path when there is none.
pub fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), OsStr::to_string_lossy)
}

/// Whether the error chain bottoms out in a closed stdout (`man_files | head`).
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}
