//! Bundle lookup
//!
//! A [`Bundle`] resolves a logical resource name to a readable byte stream. Resources
//! compiled into the binary come from an [`EmbeddedBundle`] (see [`embedded_bundle!`]);
//! a [`DirectoryBundle`] serves the same role for resources shipped next to the binary.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::path_utils;

/// Source of bundled resources, looked up by logical name
pub trait Bundle: Send + Sync {
    /// Open the named resource positioned at its first byte.
    ///
    /// `Ok(None)` means the bundle has no resource with that name.
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>>;

    /// Logical names of every resource in the bundle, sorted
    fn names(&self) -> io::Result<Vec<String>>;
}

/// Resources compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedBundle {
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedBundle {
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }

    fn find(&self, name: &str) -> Option<&'static [u8]> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, bytes)| *bytes)
    }
}

impl Bundle for EmbeddedBundle {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>> {
        Ok(self
            .find(name)
            .map(|bytes| Box::new(Cursor::new(bytes)) as Box<dyn Read + Send>))
    }

    fn names(&self) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}

/// Build an [`EmbeddedBundle`] from files included at compile time.
///
/// Paths are resolved relative to the file invoking the macro, like `include_bytes!`.
///
/// ```ignore
/// static BUNDLE: resfetch::EmbeddedBundle = resfetch::embedded_bundle! {
///     "hello.cmd" => "../assets/hello.cmd",
/// };
/// ```
#[macro_export]
macro_rules! embedded_bundle {
    ($($name:literal => $path:literal),* $(,)?) => {{
        const ENTRIES: &[(&str, &[u8])] = &[$(($name, include_bytes!($path) as &[u8])),*];
        $crate::EmbeddedBundle::new(ENTRIES)
    }};
}

/// Resources stored as plain files below a root directory
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Bundle for DirectoryBundle {
    fn open(&self, name: &str) -> io::Result<Option<Box<dyn Read + Send + '_>>> {
        let Some(relative) = path_utils::relative_resource_path(name) else {
            return Ok(None);
        };
        let path = self.root.join(relative);
        if !path.is_file() {
            return Ok(None);
        }
        match File::open(&path) {
            Ok(file) => Ok(Some(Box::new(file) as Box<dyn Read + Send>)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                names.push(path_utils::to_forward_slashes(relative));
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEST_ENTRIES: &[(&str, &[u8])] = &[
        ("hello.cmd", b"@echo hello\r\n" as &[u8]),
        ("data/table.csv", b"a,b\n1,2\n" as &[u8]),
    ];
    static TEST_BUNDLE: EmbeddedBundle = EmbeddedBundle::new(TEST_ENTRIES);

    fn read_all(bundle: &dyn Bundle, name: &str) -> Option<Vec<u8>> {
        let mut reader = bundle.open(name).unwrap()?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        Some(buf)
    }

    #[test]
    fn test_embedded_open_existing() {
        assert_eq!(
            read_all(&TEST_BUNDLE, "hello.cmd"),
            Some(b"@echo hello\r\n".to_vec())
        );
    }

    #[test]
    fn test_embedded_open_missing() {
        assert!(read_all(&TEST_BUNDLE, "missing.cmd").is_none());
    }

    #[test]
    fn test_embedded_names_sorted() {
        assert_eq!(
            TEST_BUNDLE.names().unwrap(),
            vec!["data/table.csv".to_string(), "hello.cmd".to_string()]
        );
    }

    #[test]
    fn test_embedded_bundle_macro() {
        let bundle = crate::embedded_bundle! {
            "hello.cmd" => "../assets/hello.cmd",
        };
        let bytes = read_all(&bundle, "hello.cmd").unwrap();
        assert_eq!(bytes, include_bytes!("../assets/hello.cmd"));
    }

    #[test]
    fn test_directory_bundle_open_and_names() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("top.txt"), "top").unwrap();
        std::fs::write(temp.path().join("nested/inner.txt"), "inner").unwrap();

        let bundle = DirectoryBundle::new(temp.path());
        assert_eq!(read_all(&bundle, "top.txt"), Some(b"top".to_vec()));
        assert_eq!(
            read_all(&bundle, "nested/inner.txt"),
            Some(b"inner".to_vec())
        );
        assert_eq!(
            bundle.names().unwrap(),
            vec!["nested/inner.txt".to_string(), "top.txt".to_string()]
        );
    }

    #[test]
    fn test_directory_bundle_missing_and_invalid() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("subdir")).unwrap();
        let bundle = DirectoryBundle::new(temp.path());

        assert!(read_all(&bundle, "nope.txt").is_none());
        assert!(read_all(&bundle, "subdir").is_none());
        assert!(read_all(&bundle, "../outside.txt").is_none());
    }
}
