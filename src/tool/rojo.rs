//! rojo invocations and project file checks

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Tool, ToolInvocation};
use crate::error::{self, Result};

/// The parts of a `*.project.json` this crate looks at
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectFile {
    pub name: Option<String>,
    pub tree: serde_json::Value,
}

/// `rojo build -o <output> <project>`
pub fn build(output: &Path, project: &Path, current_dir: &Path) -> ToolInvocation {
    ToolInvocation::new(Tool::Rojo, current_dir)
        .arg("build")
        .arg("-o")
        .arg(output)
        .arg(project)
}

/// `rojo sourcemap <project> -o <output>`
pub fn sourcemap(project: &Path, output: &Path, current_dir: &Path) -> ToolInvocation {
    ToolInvocation::new(Tool::Rojo, current_dir)
        .arg("sourcemap")
        .arg(project)
        .arg("-o")
        .arg(output)
}

/// Check that a project descriptor exists and is a rojo project
pub fn read_project(path: &Path) -> Result<ProjectFile> {
    if !path.is_file() {
        return Err(error::tool::project_not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))?;
    serde_json::from_str(&content).map_err(|e| error::tool::project_invalid(path, e.to_string()))
}
