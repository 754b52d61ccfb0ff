//! Command-line argument errors

use super::BuildError;

/// Creates a missing argument error
pub fn missing_argument(name: impl Into<String>) -> BuildError {
    BuildError::MissingArgument { name: name.into() }
}

/// Creates an unknown build type error
pub fn unknown_build_type(value: impl Into<String>) -> BuildError {
    BuildError::UnknownBuildType {
        value: value.into(),
    }
}

/// Creates an unknown convert type error
pub fn unknown_convert_type(value: impl Into<String>) -> BuildError {
    BuildError::UnknownConvertType {
        value: value.into(),
    }
}
