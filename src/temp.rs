//! Process-wide temp root resolution.
//!
//! The temp root is read once per process and never changes afterwards. Callers that
//! need a different root (tests, the `--temp-root` flag) build their own [`FetchConfig`]
//! and pass it explicitly.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static SYSTEM_CONFIG: OnceLock<FetchConfig> = OnceLock::new();

/// Where temp directories are created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    temp_root: PathBuf,
}

impl FetchConfig {
    /// The configuration derived from the operating system, resolved on first use
    pub fn system() -> &'static FetchConfig {
        SYSTEM_CONFIG.get_or_init(|| FetchConfig {
            temp_root: temp_dir_base(),
        })
    }

    /// A configuration rooted at an explicit directory
    pub fn with_temp_root(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: temp_root.into(),
        }
    }

    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }
}

/// Returns the system temp directory as an absolute path.
/// Never returns a relative path, so temp dirs are never created under the current working
/// directory (avoids ./tmp when TMPDIR=tmp).
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    let base = if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    };
    dunce::simplified(&base).to_path_buf()
}
