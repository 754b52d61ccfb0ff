//! Build configuration (luau-build.yaml)
//!
//! Every field is optional in the file; missing values fall back to the
//! layout the build scripts have always assumed (`src/`, `dist/`, `temp-src/`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Build configuration from luau-build.yaml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct BuildConfig {
    /// Luau source tree
    pub source_dir: PathBuf,

    /// Directory that receives archives, bundles and models
    pub out_dir: PathBuf,

    /// Scratch directory for the rewritten source tree
    pub staging_dir: PathBuf,

    /// Top-level folder name inside source archives.
    /// Defaults to the file name of `source_dir`.
    pub archive_root: Option<String>,

    /// Bundle entry point, relative to the staged tree
    pub entry_point: PathBuf,

    pub darklua: DarkluaConfig,

    pub rojo: RojoConfig,

    pub tools: ToolsConfig,
}

/// darklua configuration files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct DarkluaConfig {
    /// Config used when bundling into a single file
    pub bundle_config: PathBuf,

    /// Config used when converting requires to Roblox instance paths
    pub convert_config: PathBuf,
}

/// rojo project files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct RojoConfig {
    /// Project compiled into the binary model
    pub model_project: PathBuf,

    /// Project describing the staged tree, used for source maps
    pub sourcemap_project: PathBuf,

    /// Where the generated source map is written
    pub sourcemap_file: PathBuf,
}

/// Explicit executables for the external tools
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ToolsConfig {
    pub darklua: Option<PathBuf>,
    pub rojo: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            out_dir: PathBuf::from("dist"),
            staging_dir: PathBuf::from("temp-src"),
            archive_root: None,
            entry_point: PathBuf::from("init.luau"),
            darklua: DarkluaConfig::default(),
            rojo: RojoConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Default for DarkluaConfig {
    fn default() -> Self {
        Self {
            bundle_config: PathBuf::from("darklua/bundle.json5"),
            convert_config: PathBuf::from("darklua/convert-require.json5"),
        }
    }
}

impl Default for RojoConfig {
    fn default() -> Self {
        Self {
            model_project: PathBuf::from("rbxm-build.project.json"),
            sourcemap_project: PathBuf::from("temp.project.json"),
            sourcemap_file: PathBuf::from("temp-sourcemap.json"),
        }
    }
}

impl BuildConfig {
    /// Parse build configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Folder name that archive entries are rooted under
    pub fn archive_root(&self) -> String {
        self.archive_root.clone().unwrap_or_else(|| {
            dir_name(&self.source_dir).unwrap_or_else(|| "src".to_string())
        })
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().to_string())
}
