//! Error types and handling for luau-build
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`cli`]: Command-line argument errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`tool`]: External tool errors

pub mod cli;
pub mod config;
pub mod fs;
pub mod tool;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for luau-build operations
#[derive(Error, Diagnostic, Debug)]
pub enum BuildError {
    // Argument errors
    #[error("{name} argument missing")]
    #[diagnostic(code(luau_build::cli::missing_argument))]
    MissingArgument { name: String },

    #[error("Unknown build type '{value}'")]
    #[diagnostic(
        code(luau_build::cli::unknown_build_type),
        help("Valid build types: source, bundle, rbxm")
    )]
    UnknownBuildType { value: String },

    #[error("Invalid convert type '{value}'")]
    #[diagnostic(
        code(luau_build::cli::unknown_convert_type),
        help("Valid convert types: rblx_require, remove_self")
    )]
    UnknownConvertType { value: String },

    // Source tree errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(luau_build::source::not_found),
        help("Check 'source-dir' in luau-build.yaml or the path passed on the command line")
    )]
    SourceNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(luau_build::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(luau_build::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("File is not valid UTF-8 text: {path}")]
    #[diagnostic(
        code(luau_build::fs::decode_failed),
        help("Only text files can be staged; move binary assets out of the source tree")
    )]
    FileDecodeFailed { path: String },

    #[error("Failed to write archive '{path}': {reason}")]
    #[diagnostic(code(luau_build::archive::write_failed))]
    ArchiveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(luau_build::fs::io_error))]
    IoError { message: String },

    // External tool errors
    #[error("Could not run {tool} ('{program}'): {reason}")]
    #[diagnostic(
        code(luau_build::tool::not_found),
        help("Install the tool (e.g. with aftman) or set 'tools.{tool}' in luau-build.yaml")
    )]
    ToolNotFound {
        tool: String,
        program: String,
        reason: String,
    },

    #[error("{tool} exited with {}", exit_description(.code))]
    #[diagnostic(
        code(luau_build::tool::failed),
        help("See the {tool} output above for details")
    )]
    ToolFailed { tool: String, code: Option<i32> },

    #[error("Project file not found: {path}")]
    #[diagnostic(code(luau_build::rojo::project_not_found))]
    ProjectFileNotFound { path: String },

    #[error("Invalid project file '{path}': {reason}")]
    #[diagnostic(code(luau_build::rojo::project_invalid))]
    ProjectFileInvalid { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(luau_build::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(luau_build::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(luau_build::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },
}

#[allow(clippy::ref_option)]
fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BuildError {
    fn from(err: serde_yaml::Error) -> Self {
        BuildError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BuildError>;
