//! Command implementations for the luau-build and luau-convert binaries

pub mod build;
pub mod convert;
