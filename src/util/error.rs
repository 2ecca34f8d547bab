// Linkfolio - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. Storage failures are recovered by the
// store and logged; none of these errors ever reaches the user.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Storage read errors
// ---------------------------------------------------------------------------

/// Errors loading the persisted my-profile blob.
#[derive(Debug)]
pub enum StorageReadError {
    /// The persisted blob exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The persisted blob is not valid JSON for a profile record.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error reading the persisted blob.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StorageReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Stored profile '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Malformed { path, source } => {
                write!(
                    f,
                    "Stored profile '{}' is not valid JSON: {source}",
                    path.display()
                )
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading stored profile '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StorageReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Storage write errors
// ---------------------------------------------------------------------------

/// Errors persisting the my-profile blob.
#[derive(Debug)]
pub enum StorageWriteError {
    /// The profile record could not be serialised to JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error during one of the write steps (directory creation, temp
    /// file write, rename into place).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for StorageWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { path, source } => {
                write!(
                    f,
                    "Cannot serialise profile for '{}': {source}",
                    path.display()
                )
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StorageWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}
