//! External tool errors

use std::path::Path;

use super::BuildError;

/// Creates a tool not found error
pub fn not_found(tool: &str, program: &str, err: &std::io::Error) -> BuildError {
    BuildError::ToolNotFound {
        tool: tool.to_string(),
        program: program.to_string(),
        reason: err.to_string(),
    }
}

/// Creates a tool failed error
pub fn failed(tool: &str, code: Option<i32>) -> BuildError {
    BuildError::ToolFailed {
        tool: tool.to_string(),
        code,
    }
}

/// Creates a project file not found error
pub fn project_not_found(path: &Path) -> BuildError {
    BuildError::ProjectFileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an invalid project file error
pub fn project_invalid(path: &Path, reason: impl Into<String>) -> BuildError {
    BuildError::ProjectFileInvalid {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
