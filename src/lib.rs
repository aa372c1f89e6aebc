//! resfetch - extract bundled resources into a scoped temp directory
//!
//! External tools (subprocesses, native libraries) usually need a real path on disk.
//! resfetch copies resources that ship inside the application (see [`Bundle`]) into a
//! per-project directory under the system temp root, keeps track of what has been
//! extracted, and cleans up single files or the whole directory.
//!
//! ```no_run
//! use std::sync::Arc;
//! use resfetch::{TempDirectory, embedded_bundle};
//!
//! # fn main() -> resfetch::Result<()> {
//! let bundle = Arc::new(embedded_bundle! { "hello.cmd" => "../assets/hello.cmd" });
//! let dir = TempDirectory::with_group(".acme", "launcher", bundle)?.scoped();
//! let script = dir.extract("hello.cmd")?;
//! println!("extracted to {}", script.path().display());
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod error;
pub mod path_utils;
pub mod resource;
pub mod temp;
pub mod temp_dir;

pub use bundle::{Bundle, DirectoryBundle, EmbeddedBundle};
pub use error::{FetchError, Result};
pub use resource::ResourceHandle;
pub use temp::FetchConfig;
pub use temp_dir::{PendingExtraction, ScopedTempDirectory, TempDirectory};
