use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FileReadError>;

/// Why a file could not be searched. Display strings are the messages sent back to callers.
#[derive(Error, Debug)]
pub enum FileReadError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Error reading file: {source}")]
    Io {
        #[source]
        source: io::Error,
    },
}

impl FileReadError {
    /// Classify an I/O failure on `path` (the caller's input, echoed verbatim in messages).
    pub fn from_io(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_string(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_string(),
            },
            _ => Self::Io { source },
        }
    }
}
