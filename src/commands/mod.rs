//! Command implementations for the resfetch CLI

pub mod clean;
pub mod extract;
pub mod list;
pub mod version;

use std::path::PathBuf;
use std::sync::Arc;

use resfetch::{Bundle, DirectoryBundle, EmbeddedBundle, embedded_bundle};

/// Resources compiled into the resfetch binary
static BUILTIN_BUNDLE: EmbeddedBundle = embedded_bundle! {
    "hello.cmd" => "../../assets/hello.cmd",
};

/// The bundle a command reads from: a resource directory if given, else the built-in one
fn open_bundle(bundle_dir: Option<PathBuf>) -> Arc<dyn Bundle> {
    match bundle_dir {
        Some(dir) => Arc::new(DirectoryBundle::new(dir)),
        None => Arc::new(BUILTIN_BUNDLE),
    }
}
