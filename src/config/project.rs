//! Project root and configuration loading
//!
//! A [`Project`] ties a root directory to its [`BuildConfig`]. Every relative
//! path in the configuration resolves against the root, and external tools
//! run with the root as their working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{self, Result};

/// Default config filename, looked up in the project root
pub const CONFIG_FILE: &str = "luau-build.yaml";

/// A project root with its loaded build configuration
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: BuildConfig,
    pub verbose: bool,
}

impl Project {
    /// Open a project.
    ///
    /// `root` defaults to the current directory. `config_path` defaults to
    /// `<root>/luau-build.yaml`, which may be absent; an explicitly given
    /// config file must exist.
    pub fn open(root: Option<&Path>, config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let root = match root {
            Some(root) => absolute(root)?,
            None => std::env::current_dir()?,
        };

        let config = match config_path {
            Some(path) => {
                let path = absolute(path)?;
                if !path.is_file() {
                    return Err(error::config::not_found(path.display().to_string()));
                }
                load_config_file(&path)?
            }
            None => {
                let path = root.join(CONFIG_FILE);
                if path.is_file() {
                    load_config_file(&path)?
                } else {
                    BuildConfig::default()
                }
            }
        };

        Ok(Self {
            root,
            config,
            verbose,
        })
    }

    /// Create a project from an already loaded configuration
    pub fn with_config(root: impl Into<PathBuf>, config: BuildConfig) -> Self {
        Self {
            root: root.into(),
            config,
            verbose: false,
        }
    }

    /// Resolve a configured path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.resolve(&self.config.source_dir)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.resolve(&self.config.out_dir)
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.resolve(&self.config.staging_dir)
    }

    /// Path of an artifact inside the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.out_dir().join(file_name)
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_out_dir(&self) -> Result<PathBuf> {
        let out_dir = self.out_dir();
        fs::create_dir_all(&out_dir).map_err(|e| error::fs::write_failed(&out_dir, &e))?;
        Ok(out_dir)
    }
}

fn load_config_file(path: &Path) -> Result<BuildConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

    BuildConfig::from_yaml(&content).map_err(|e| {
        error::config::parse_failed(path.display().to_string(), parse_reason(e))
    })
}

fn parse_reason(err: crate::error::BuildError) -> String {
    match err {
        crate::error::BuildError::ConfigParseFailed { reason, .. } => reason,
        other => other.to_string(),
    }
}

/// Make a path absolute against the current directory without touching the file system
pub fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
