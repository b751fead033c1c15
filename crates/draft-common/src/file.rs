//! Plain-text file handles.
//!
//! Stylesheet sources are read as UTF-8 text through this thin abstraction so
//! callers (and tests) can construct handles from paths or in-memory strings
//! without touching the filesystem layer directly.

use std::fmt;
use std::path::{Path, PathBuf};

/// Error raised when a file handle cannot produce its text content.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The underlying read failed (missing file, permissions, ...).
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file contents were not valid UTF-8.
    #[error("'{path}' is not valid UTF-8")]
    Encoding {
        /// Path of the offending file.
        path: PathBuf,
    },
}

/// A handle to a UTF-8 text source, either on disk or in memory.
///
/// In-memory handles exist so tests and hot-reload tooling can feed the
/// stylesheet parser without temp files.
#[derive(Debug, Clone)]
pub enum FileHandle {
    /// A file on disk, read lazily.
    Path(PathBuf),
    /// An in-memory source with a display name.
    Memory {
        /// Name reported in diagnostics.
        name: String,
        /// The text content.
        contents: String,
    },
}

impl FileHandle {
    /// Create a handle for a file on disk.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    /// Create an in-memory handle with a display name for diagnostics.
    pub fn memory(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::Memory {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Read the handle's full contents as a string.
    ///
    /// # Errors
    /// Returns [`FileError`] if the file cannot be read or is not UTF-8.
    pub fn read_string(&self) -> Result<String, FileError> {
        match self {
            Self::Path(path) => {
                let bytes = std::fs::read(path).map_err(|source| FileError::Io {
                    path: path.clone(),
                    source,
                })?;
                String::from_utf8(bytes).map_err(|_| FileError::Encoding { path: path.clone() })
            }
            Self::Memory { contents, .. } => Ok(contents.clone()),
        }
    }
}

impl fmt::Display for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Memory { name, .. } => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_handle_round_trips() {
        let handle = FileHandle::memory("inline.css", "a { left: 1px; }");
        assert_eq!(handle.read_string().unwrap(), "a { left: 1px; }");
        assert_eq!(handle.to_string(), "inline.css");
    }

    #[test]
    fn missing_file_reports_path() {
        let handle = FileHandle::new("/definitely/not/here.css");
        let err = handle.read_string().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.css"));
    }
}
