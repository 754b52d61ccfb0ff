//! luau-build - build orchestration for Luau source trees
//!
//! Packages a Luau source tree as a zip archive, bundles it into one file
//! with darklua, or compiles it into a binary Roblox model with rojo. A
//! companion command rewrites `@self` requires before those tools run.
//!
//! The heavy lifting is done by the external tools; this crate stages the
//! sources, builds the tool command lines and checks what comes back.

pub mod archive;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod progress;
pub mod staging;
pub mod tool;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{BuildError, Result};
