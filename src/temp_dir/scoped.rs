//! Scope guard that deletes a temp directory when dropped

use std::ops::Deref;

use tracing::warn;

use super::TempDirectory;

/// Deletes the wrapped [`TempDirectory`] when it goes out of scope.
///
/// Explicit [`delete`](TempDirectory::delete) calls through the guard are fine; the
/// drop hook skips directories that are already deleted, so deletion runs once.
#[derive(Debug)]
pub struct ScopedTempDirectory {
    dir: TempDirectory,
}

impl ScopedTempDirectory {
    pub(super) fn new(dir: TempDirectory) -> Self {
        Self { dir }
    }
}

impl Deref for ScopedTempDirectory {
    type Target = TempDirectory;

    fn deref(&self) -> &TempDirectory {
        &self.dir
    }
}

impl Drop for ScopedTempDirectory {
    fn drop(&mut self) {
        if self.dir.is_deleted() {
            return;
        }
        if let Err(e) = self.dir.delete() {
            warn!(
                path = %self.dir.path().display(),
                error = %e,
                "failed to delete temp directory on scope exit"
            );
        }
    }
}
