//! Project-scoped temporary directories
//!
//! A [`TempDirectory`] lives under the system temp root, optionally inside a shared
//! group directory:
//!
//! ```text
//! <temp root>/
//! └── <group>/            (optional, shared, never deleted here)
//!     └── <project>/      (created on construction, removed by delete())
//!         ├── hello.cmd
//!         └── tools/run.sh
//! ```
//!
//! Resources are copied out of the [`Bundle`] on first [`extract`](TempDirectory::extract)
//! and cached by logical name; later calls return the same [`ResourceHandle`].
//!
//! ## Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use resfetch::{DirectoryBundle, TempDirectory};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let bundle = Arc::new(DirectoryBundle::new("resources"));
//! let dir = TempDirectory::with_group(".acme", "launcher", bundle)?.scoped();
//! let script = dir.extract("hello.cmd")?;
//! std::process::Command::new(script.path()).status()?;
//! // directory removed when `dir` goes out of scope
//! # Ok(())
//! # }
//! ```

mod pending;
mod scoped;

pub use pending::PendingExtraction;
pub use scoped::ScopedTempDirectory;

use std::cmp::Reverse;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::bundle::Bundle;
use crate::error::{self, FetchError, Result};
use crate::path_utils;
use crate::resource::ResourceHandle;
use crate::temp::FetchConfig;

/// State shared between a [`TempDirectory`], its async extraction tasks, and the
/// back references held by its resources
pub(crate) struct DirectoryState {
    group_name: String,
    project_name: String,
    path: PathBuf,
    bundle: Arc<dyn Bundle>,
    fetched: DashMap<String, Arc<ResourceHandle>>,
    deleted: AtomicBool,
}

impl DirectoryState {
    pub(crate) fn bundle(&self) -> &dyn Bundle {
        self.bundle.as_ref()
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Drop `handle` from the cache unless the name has since been re-extracted
    pub(crate) fn remove_fetched_resource(&self, handle: &ResourceHandle) {
        self.fetched
            .remove_if(handle.name(), |_, cached| std::ptr::eq(Arc::as_ptr(cached), handle));
    }

    fn is_deleted(&self) -> bool {
        self.deleted.load(Ordering::SeqCst)
    }

    fn extract(self: &Arc<Self>, resource_name: &str) -> Result<Arc<ResourceHandle>> {
        if self.is_deleted() {
            return Err(FetchError::TempDirectoryDeleted {
                path: self.path.clone(),
            });
        }

        // Cached handles are returned as-is, even if the file was removed behind our back
        if let Some(cached) = self.fetched.get(resource_name) {
            debug!(resource = resource_name, "resource already extracted");
            return Ok(Arc::clone(cached.value()));
        }

        let relative = path_utils::relative_resource_path(resource_name)
            .ok_or_else(|| error::invalid_name(resource_name))?;
        let handle = Arc::new(ResourceHandle::create(resource_name, &relative, self)?);

        // Two threads racing on a new name both copy; the first insert wins for both
        let cached = self
            .fetched
            .entry(resource_name.to_string())
            .or_insert(handle);
        Ok(Arc::clone(cached.value()))
    }
}

/// Temporary directory for one project, holding extracted resources
pub struct TempDirectory {
    state: Arc<DirectoryState>,
}

impl TempDirectory {
    /// Create (if missing) `<temp root>/<project_name>`
    pub fn new(project_name: &str, bundle: Arc<dyn Bundle>) -> Result<Self> {
        Self::with_group("", project_name, bundle)
    }

    /// Create (if missing) `<temp root>/<group_name>/<project_name>`.
    ///
    /// A blank `group_name` places the project directly under the temp root.
    pub fn with_group(
        group_name: &str,
        project_name: &str,
        bundle: Arc<dyn Bundle>,
    ) -> Result<Self> {
        Self::with_config(FetchConfig::system(), group_name, project_name, bundle)
    }

    /// Same as [`with_group`](Self::with_group) with an explicit temp root
    pub fn with_config(
        config: &FetchConfig,
        group_name: &str,
        project_name: &str,
        bundle: Arc<dyn Bundle>,
    ) -> Result<Self> {
        let path = Self::project_path(config, group_name, project_name)?;
        if let Some(group) = path.parent().filter(|_| !path_utils::is_blank(group_name)) {
            create_directory(group)?;
        }
        create_directory(&path)?;

        Ok(Self {
            state: Arc::new(DirectoryState {
                group_name: group_name.to_string(),
                project_name: project_name.to_string(),
                path,
                bundle,
                fetched: DashMap::new(),
                deleted: AtomicBool::new(false),
            }),
        })
    }

    /// Where [`with_config`](Self::with_config) would place the project directory.
    ///
    /// Validates both names but touches nothing on disk.
    pub fn project_path(
        config: &FetchConfig,
        group_name: &str,
        project_name: &str,
    ) -> Result<PathBuf> {
        let mut path = config.temp_root().to_path_buf();
        if !path_utils::is_blank(group_name) {
            check_directory_name(group_name)?;
            path.push(group_name);
        }
        check_directory_name(project_name)?;
        path.push(project_name);
        Ok(path)
    }

    /// Extract a resource into this directory, or return the cached handle.
    ///
    /// Blocks until the file is fully written. Use
    /// [`extract_async`](Self::extract_async) for large resources.
    pub fn extract(&self, resource_name: &str) -> Result<Arc<ResourceHandle>> {
        self.state.extract(resource_name)
    }

    /// Run [`extract`](Self::extract) on the tokio blocking pool.
    ///
    /// The work is scheduled immediately; the returned future resolves to the same
    /// result the synchronous call would produce. Must be called from within a tokio
    /// runtime, otherwise the future resolves to an error.
    pub fn extract_async(&self, resource_name: &str) -> PendingExtraction {
        let state = Arc::clone(&self.state);
        let name = resource_name.to_string();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                PendingExtraction::running(runtime.spawn_blocking(move || state.extract(&name)))
            }
            Err(e) => PendingExtraction::failed(error::io_failed(
                format!("No async runtime available to extract '{name}'"),
                io::Error::other(e),
            )),
        }
    }

    /// Remove the project directory and everything in it. The group directory stays.
    ///
    /// Entries are removed deepest first. The first failure aborts; entries removed
    /// up to that point stay removed. Afterwards no more resources can be extracted.
    /// Handles obtained earlier are not marked deleted.
    pub fn delete(&self) -> Result<()> {
        let root = &self.state.path;
        let mut entries = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| {
                error::io_failed(
                    format!("Unable to access temp directory '{}'", root.display()),
                    io::Error::from(e),
                )
            })?;
            entries.push(entry);
        }

        entries.sort_by_key(|entry| Reverse(entry.depth()));
        for entry in &entries {
            remove_entry(entry)?;
        }

        self.state.deleted.store(true, Ordering::SeqCst);
        self.state.fetched.clear();
        debug!(path = %root.display(), removed = entries.len(), "deleted temp directory");
        Ok(())
    }

    /// Consume the directory and [`delete`](Self::delete) it
    pub fn close(self) -> Result<()> {
        self.delete()
    }

    /// Wrap in a guard that deletes the directory when dropped
    pub fn scoped(self) -> ScopedTempDirectory {
        ScopedTempDirectory::new(self)
    }

    /// Full path of the project directory
    pub fn path(&self) -> &Path {
        &self.state.path
    }

    /// Group directory name, or an empty string when there is none
    pub fn group_name(&self) -> &str {
        &self.state.group_name
    }

    pub fn project_name(&self) -> &str {
        &self.state.project_name
    }

    pub fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }

    /// Resources extracted and not yet deleted, sorted by name
    pub fn fetched_resources(&self) -> Vec<Arc<ResourceHandle>> {
        let mut resources: Vec<_> = self
            .state
            .fetched
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        resources.sort_by(|a, b| a.name().cmp(b.name()));
        resources
    }
}

impl fmt::Debug for TempDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TempDirectory")
            .field("group_name", &self.state.group_name)
            .field("project_name", &self.state.project_name)
            .field("path", &self.state.path)
            .field("fetched", &self.state.fetched.len())
            .field("deleted", &self.is_deleted())
            .finish()
    }
}

/// Group and project names must be a single path segment
fn check_directory_name(name: &str) -> Result<()> {
    match path_utils::relative_resource_path(name) {
        Some(relative) if relative.components().count() == 1 => Ok(()),
        _ => Err(error::invalid_directory_name(name)),
    }
}

/// Create a directory unless it already exists
fn create_directory(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(error::io_failed(
            format!("Failed to create directory '{}'", path.display()),
            e,
        )),
    }
}

fn remove_entry(entry: &DirEntry) -> Result<()> {
    let path = entry.path();
    let removed = if entry.file_type().is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| {
        error::io_failed(format!("Error deleting temp file '{}'", path.display()), e)
    })
}
