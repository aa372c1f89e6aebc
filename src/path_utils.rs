//! Path helpers shared by bundles and temp directories
//!
//! Logical resource names always use `/` between segments, regardless of platform.

use std::path::{Path, PathBuf};

/// Characters that may not appear inside a single resource name segment.
/// `\` and `:` would let a name escape its directory on Windows.
const SEGMENT_UNSAFE_CHARS: &[char] = &['\\', ':', '\0'];

/// Convert a path to a string using forward slashes.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use resfetch::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("C:\\Users\\file.txt")), "C:/Users/file.txt");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Map a logical resource name to a path relative to its containing directory.
///
/// Returns `None` for names that are empty, absolute, or contain `.`/`..` segments,
/// so the result always stays inside the directory it is joined onto.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use resfetch::path_utils::relative_resource_path;
///
/// assert_eq!(
///     relative_resource_path("tools/run.sh"),
///     Some(PathBuf::from("tools").join("run.sh"))
/// );
/// assert_eq!(relative_resource_path("../escape"), None);
/// ```
pub fn relative_resource_path(name: &str) -> Option<PathBuf> {
    if name.is_empty() || name.starts_with('/') {
        return None;
    }

    let mut path = PathBuf::new();
    for segment in name.split('/') {
        if segment.is_empty()
            || segment == "."
            || segment == ".."
            || segment.contains(SEGMENT_UNSAFE_CHARS)
        {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

/// True when a namespace segment is empty or only whitespace
pub fn is_blank(segment: &str) -> bool {
    segment.trim().is_empty()
}
