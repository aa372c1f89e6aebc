//! Resource access errors

use std::io;

use super::FetchError;

/// Creates an error for a resource the bundle does not contain
pub fn not_found(name: &str) -> FetchError {
    FetchError::ResourceAccess {
        message: format!("Unable to access resource '{name}'"),
        source: None,
    }
}

/// Creates an error for a resource name that cannot be mapped into the temp directory
pub fn invalid_name(name: &str) -> FetchError {
    FetchError::ResourceAccess {
        message: format!("Invalid resource name '{name}'"),
        source: None,
    }
}

/// Wraps an I/O failure with a message naming what was being accessed
pub fn io_failed(message: impl Into<String>, source: io::Error) -> FetchError {
    FetchError::ResourceAccess {
        message: message.into(),
        source: Some(source),
    }
}

/// Creates an error for a group or project name that is not a single path segment
pub fn invalid_directory_name(name: &str) -> FetchError {
    FetchError::ResourceAccess {
        message: format!("Invalid temp directory name '{name}'"),
        source: None,
    }
}
