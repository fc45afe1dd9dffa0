//! Filesystem utilities.
//!
//! Read-only helpers used by the loader and the validators.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Names starting with `.` are hidden and never inspected.
#[must_use]
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Read a file to string, returning None if it is not a regular file.
pub fn read_optional(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    if path.is_file() {
        Ok(Some(std::fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}

/// Names of the non-hidden regular files directly inside `dir`, sorted.
pub fn list_visible_files(dir: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if is_hidden(&entry.file_name()) || !entry.path().is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Whether the current user may execute the file (`access(2)` with `X_OK`).
#[cfg(unix)]
pub fn is_executable(path: impl AsRef<Path>) -> io::Result<bool> {
    use nix::errno::Errno;
    use nix::unistd::{AccessFlags, access};

    match access(path.as_ref(), AccessFlags::X_OK) {
        Ok(()) => Ok(true),
        Err(Errno::EACCES) => Ok(false),
        Err(errno) => Err(errno.into()),
    }
}

/// Non-Unix platforms have no execute bit; every existing file counts as executable.
#[cfg(not(unix))]
pub fn is_executable(path: impl AsRef<Path>) -> io::Result<bool> {
    std::fs::metadata(path.as_ref())?;
    Ok(true)
}
