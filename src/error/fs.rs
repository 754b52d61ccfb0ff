//! File system errors

use std::path::Path;

use super::BuildError;

/// Creates a source directory not found error
pub fn source_not_found(path: &Path) -> BuildError {
    BuildError::SourceNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: &std::io::Error) -> BuildError {
    BuildError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: &std::io::Error) -> BuildError {
    BuildError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a decode failed error for non UTF-8 content
pub fn decode_failed(path: &Path) -> BuildError {
    BuildError::FileDecodeFailed {
        path: path.display().to_string(),
    }
}

/// Creates an archive failed error
pub fn archive_failed(path: &Path, reason: impl Into<String>) -> BuildError {
    BuildError::ArchiveFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> BuildError {
    BuildError::IoError {
        message: message.into(),
    }
}
