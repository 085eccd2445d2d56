//! Executable lookup on `PATH`.
//!
//! Callers use this to prefer a system tool (`dnf`, `rpm`, `sudo`) over a
//! built-in fallback. Nothing in the fetch pipeline depends on it.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Returns `true` if `command` resolves to an executable file on `PATH`.
pub fn is_executable_on_path(command: &str) -> bool {
    locate(command).is_some()
}

/// Full path of `command` on `PATH`, if any.
pub fn locate(command: &str) -> Option<PathBuf> {
    if command.is_empty() {
        return None;
    }
    which::which(command).ok()
}

/// Same as [`locate`], searching an explicit `PATH`-style list instead.
pub fn locate_in(command: &str, paths: impl AsRef<OsStr>, cwd: impl AsRef<Path>) -> Option<PathBuf> {
    if command.is_empty() {
        return None;
    }
    which::which_in(command, Some(paths), cwd).ok()
}
