//! Error types for point-set and mesh I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while loading points or saving meshes.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unrecognized file extension.
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    pub(crate) fn unknown_format(path: &std::path::Path) -> Self {
        Self::UnknownFormat {
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IoError::invalid_content("bad coordinate");
        assert!(format!("{err}").contains("bad coordinate"));

        let err = IoError::unknown_format(std::path::Path::new("mesh.obj"));
        assert!(format!("{err}").contains(".obj"));
    }
}
