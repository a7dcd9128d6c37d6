//! Platform helpers for stategen.
//!
//! The generator's command-line contract uses the host platform's conventional
//! path-list separator for the `-cp` argument, and the configured executable may
//! be either an absolute path or a bare command name resolved against PATH.
//! This module encapsulates those platform differences.

use std::path::{Component, Path, PathBuf};

use crate::core::StategenError;

/// Checks if the current platform is Windows.
///
/// Compile-time check used to select the classpath separator and other
/// platform-specific behavior.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// The path-list separator expected by the generator's `-cp` argument.
///
/// `;` on Windows, `:` on Unix-like systems. This is the conventional
/// classpath separator of the host platform.
#[must_use]
pub const fn classpath_separator() -> char {
    if is_windows() { ';' } else { ':' }
}

/// Resolve the generator executable to an invocable path.
///
/// Paths containing a directory component are used as-is; the spawn attempt
/// reports a missing or non-runnable file. A bare command name is looked up in
/// PATH so the failure is caught before any arguments are marshalled.
pub fn resolve_executable(executable: &Path) -> Result<PathBuf, StategenError> {
    if executable.components().count() > 1 {
        return Ok(executable.to_path_buf());
    }
    which::which(executable).map_err(|_| StategenError::ExecutableNotFound {
        name: executable.display().to_string(),
    })
}

/// Lexically normalize a path for classpath deduplication.
///
/// Removes `.` segments and redundant separators without touching the
/// filesystem: classpath entries are allowed to not exist yet (the build may
/// create them later), so canonicalization or symlink resolution would be
/// wrong here. Two symlinked spellings of the same file are therefore treated
/// as distinct entries.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
}
