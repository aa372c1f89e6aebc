//! Extracted resource files
//!
//! A [`ResourceHandle`] represents one bundled resource that has been copied into a
//! [`TempDirectory`](crate::TempDirectory). By the time a handle exists, its file is
//! fully written and synced. Handles are only created through
//! [`TempDirectory::extract`](crate::TempDirectory::extract).

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use tracing::{debug, warn};

use crate::error::{self, FetchError, Result};
use crate::temp_dir::DirectoryState;

/// One resource file extracted into a temp directory
pub struct ResourceHandle {
    name: String,
    path: PathBuf,
    owner: Weak<DirectoryState>,
    deleted: AtomicBool,
}

impl ResourceHandle {
    /// Copy the named resource from the owner's bundle to `relative` inside the
    /// owner's directory.
    ///
    /// Either the file is fully written and a handle is returned, or an error is
    /// returned and no partial file is left behind. Nothing is created on disk
    /// unless the bundle has the resource.
    pub(crate) fn create(
        name: &str,
        relative: &Path,
        owner: &Arc<DirectoryState>,
    ) -> Result<Self> {
        let mut source = owner
            .bundle()
            .open(name)
            .map_err(|e| error::io_failed(format!("Unable to access resource '{name}'"), e))?
            .ok_or_else(|| error::not_found(name))?;

        if let Some(parent) = relative.parent().filter(|p| !p.as_os_str().is_empty()) {
            let dir = owner.path().join(parent);
            fs::create_dir_all(&dir).map_err(|e| {
                error::io_failed(format!("Failed to create directory '{}'", dir.display()), e)
            })?;
        }

        let destination = owner.path().join(relative);
        let written = copy_to_file(&mut source, &destination, name)?;
        debug!(
            resource = name,
            path = %destination.display(),
            bytes = written,
            "extracted resource"
        );

        Ok(Self {
            name: name.to_string(),
            path: destination,
            owner: Arc::downgrade(owner),
            deleted: AtomicBool::new(false),
        })
    }

    /// Logical name of the resource inside the bundle
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the extracted file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`delete`](Self::delete) has succeeded on this handle
    pub fn is_deleted(&self) -> bool {
        self.deleted.load(Ordering::SeqCst)
    }

    /// Open the extracted file for reading.
    ///
    /// This reads the copy in the temp directory, not the bundled original.
    pub fn open(&self) -> Result<File> {
        if self.is_deleted() {
            return Err(FetchError::ResourceDeleted {
                name: self.name.clone(),
            });
        }
        File::open(&self.path).map_err(|e| {
            error::io_failed(
                format!(
                    "Unable to create input stream from file '{}'",
                    self.path.display()
                ),
                e,
            )
        })
    }

    /// Read the whole extracted file into memory
    pub fn read_to_vec(&self) -> Result<Vec<u8>> {
        let mut file = self.open()?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            error::io_failed(
                format!("Unable to read file '{}'", self.path.display()),
                e,
            )
        })?;
        Ok(bytes)
    }

    /// Delete this file from the temp directory; other resources stay untouched.
    ///
    /// On failure nothing changes: the handle is not marked deleted and stays cached.
    /// A second call fails because the file is already gone.
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.path).map_err(|e| {
            error::io_failed(
                format!("Unable to delete file '{}'", self.path.display()),
                e,
            )
        })?;

        if let Some(owner) = self.owner.upgrade() {
            owner.remove_fetched_resource(self);
        }
        self.deleted.store(true, Ordering::SeqCst);
        debug!(resource = %self.name, path = %self.path.display(), "deleted resource");
        Ok(())
    }
}

impl fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("deleted", &self.is_deleted())
            .finish_non_exhaustive()
    }
}

/// Write everything from `source` into a fresh file at `destination` and sync it
fn copy_to_file(source: &mut dyn Read, destination: &Path, name: &str) -> Result<u64> {
    let mut file = File::create(destination).map_err(|e| {
        error::io_failed(
            format!(
                "Unable to access destination path '{}'",
                destination.display()
            ),
            e,
        )
    })?;

    let copied = io::copy(source, &mut file).and_then(|n| file.sync_all().map(|()| n));
    drop(file);

    copied.map_err(|e| {
        if let Err(cleanup) = fs::remove_file(destination) {
            warn!(
                path = %destination.display(),
                error = %cleanup,
                "failed to remove partially written resource"
            );
        }
        error::io_failed(
            format!(
                "Unable to copy resource '{name}' to '{}'",
                destination.display()
            ),
            e,
        )
    })
}
