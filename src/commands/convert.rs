//! `luau-convert` command: `@self` removal and Roblox require conversion

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::ConvertCli;
use crate::common::fs::{CleanupGuard, clear_dir_contents};
use crate::config::{Project, project::absolute};
use crate::error::{self, BuildError, Result};
use crate::staging::{StagingDir, StagingReport, stage_source};
use crate::tool::{self, SystemToolRunner, ToolRunner, darklua, rojo};
use crate::ui;

/// What `luau-convert` does to the source tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertType {
    /// Convert string requires to Roblox instance requires
    RblxRequire,
    /// Rewrite `@self` requires to relative requires
    RemoveSelf,
}

impl FromStr for ConvertType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rblx_require" => Ok(ConvertType::RblxRequire),
            "remove_self" => Ok(ConvertType::RemoveSelf),
            other => Err(error::cli::unknown_convert_type(other)),
        }
    }
}

/// Run the convert command
pub fn run(cli: ConvertCli) -> Result<()> {
    let convert_type: ConvertType = cli
        .convert_type
        .filter(|value| !value.is_empty())
        .ok_or_else(|| error::cli::missing_argument("Convert type"))?
        .parse()?;
    let source = cli
        .source
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| error::cli::missing_argument("Source path"))?;
    let destination = cli
        .destination
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| error::cli::missing_argument("Destination path"))?;

    // Paths on the command line are relative to where the user is, not to the project root
    let source = absolute(&source)?;
    let destination = absolute(&destination)?;

    match convert_type {
        ConvertType::RemoveSelf => {
            let report = remove_self(&source, &destination)?;
            ui::detail(
                cli.global.verbose,
                &format!("{} files staged, {} requires rewritten", report.files, report.rewrites),
            );
        }
        ConvertType::RblxRequire => {
            let project = Project::open(
                cli.global.root.as_deref(),
                cli.global.config.as_deref(),
                cli.global.verbose,
            )?;
            let runner = SystemToolRunner::for_project(&project);
            rblx_require(&project, &runner, &source, &destination)?;
        }
    }

    Ok(())
}

/// Stage `source` into `destination` with `@self` requires made relative
pub fn remove_self(source: &Path, destination: &Path) -> Result<StagingReport> {
    let report = stage_source(source, destination)?;
    ui::status(
        "remove_self",
        &format!("converted to {} successfully", destination.display()),
    );
    Ok(report)
}

/// Convert the requires of `source` into Roblox instance requires in `destination`.
///
/// The source is staged without `@self` aliases, rojo writes a source map
/// for the staged tree, and darklua rewrites the requires using that map.
/// The staging directory and the source map are removed afterwards, also
/// when a tool fails.
pub fn rblx_require(
    project: &Project,
    runner: &dyn ToolRunner,
    source: &Path,
    destination: &Path,
) -> Result<PathBuf> {
    let staging = StagingDir::stage(source, project.staging_dir())?;
    ui::status(
        "remove_self",
        &format!("converted to {} successfully", staging.path().display()),
    );

    let sourcemap = CleanupGuard::new(project.resolve(&project.config.rojo.sourcemap_file));
    let invocation = rojo::sourcemap(
        &project.resolve(&project.config.rojo.sourcemap_project),
        sourcemap.path(),
        &project.root,
    );
    tool::run_checked(runner, &invocation)?;

    for (path, err) in clear_dir_contents(destination)? {
        ui::warn(&format!(
            "Failed to delete {}. Reason: {err}",
            path.display()
        ));
    }

    let invocation = darklua::process(
        &project.resolve(&project.config.darklua.convert_config),
        staging.path(),
        destination,
        &project.root,
    );
    tool::run_checked(runner, &invocation)?;

    ui::status(
        "rblx_require",
        &format!("converted to {} successfully", destination.display()),
    );
    Ok(destination.to_path_buf())
}
