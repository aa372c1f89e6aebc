//! Error types and handling for resfetch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors for the I/O flavoured errors live in [`access`].

pub mod access;

pub use access::{invalid_directory_name, invalid_name, io_failed, not_found};

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for resource extraction
#[derive(Error, Diagnostic, Debug)]
pub enum FetchError {
    /// Any I/O failure: creating a directory, reading the bundle, writing or deleting a file
    #[error("{message}")]
    #[diagnostic(
        code(resfetch::resource::access),
        help("Check that the temp directory is writable and the resource exists in the bundle")
    )]
    ResourceAccess {
        message: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Resource '{name}' has already been deleted")]
    #[diagnostic(code(resfetch::resource::deleted))]
    ResourceDeleted { name: String },

    #[error("Temp directory '{}' has already been deleted", .path.display())]
    #[diagnostic(
        code(resfetch::temp_dir::deleted),
        help("Create a new TempDirectory to extract more resources")
    )]
    TempDirectoryDeleted { path: PathBuf },
}

impl FetchError {
    /// The underlying I/O error, if this is an access failure caused by one
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            FetchError::ResourceAccess { source, .. } => source.as_ref(),
            _ => None,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FetchError>;
