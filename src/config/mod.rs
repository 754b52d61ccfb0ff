//! Configuration handling for luau-build
//!
//! This module contains:
//! - `luau-build.yaml` - Build configuration ([`BuildConfig`])
//! - The project root the configuration is resolved against ([`Project`])

pub mod build;
pub mod project;

// Re-export commonly used types
pub use build::{BuildConfig, DarkluaConfig, RojoConfig, ToolsConfig};
pub use project::{CONFIG_FILE, Project};
