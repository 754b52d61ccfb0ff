//! `luau-build` command: source archives, darklua bundles and rojo models

use std::path::PathBuf;
use std::str::FromStr;

use crate::archive::archive_source;
use crate::cli::BuildCli;
use crate::config::Project;
use crate::error::{self, BuildError, Result};
use crate::staging::StagingDir;
use crate::tool::{self, SystemToolRunner, ToolRunner, darklua, rojo};
use crate::ui;

/// What `luau-build` produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    /// Zip archive of the source tree
    Source,
    /// Single-file darklua bundle
    Bundle,
    /// Binary Roblox model built by rojo
    Rbxm,
}

impl FromStr for BuildType {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "source" => Ok(BuildType::Source),
            "bundle" => Ok(BuildType::Bundle),
            "rbxm" => Ok(BuildType::Rbxm),
            other => Err(error::cli::unknown_build_type(other)),
        }
    }
}

/// Run the build command
pub fn run(cli: BuildCli) -> Result<()> {
    // Nothing may touch the file system before both arguments are known good
    let file_name = cli
        .file_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| error::cli::missing_argument("File name"))?;
    let build_type: BuildType = cli
        .build_type
        .filter(|value| !value.is_empty())
        .ok_or_else(|| error::cli::missing_argument("Build type"))?
        .parse()?;

    let project = Project::open(
        cli.global.root.as_deref(),
        cli.global.config.as_deref(),
        cli.global.verbose,
    )?;
    let runner = SystemToolRunner::for_project(&project);

    build(&project, &runner, build_type, &file_name)?;
    Ok(())
}

/// Produce one artifact in the project's output directory
pub fn build(
    project: &Project,
    runner: &dyn ToolRunner,
    build_type: BuildType,
    file_name: &str,
) -> Result<PathBuf> {
    project.ensure_out_dir()?;

    match build_type {
        BuildType::Source => source(project, file_name),
        BuildType::Bundle => bundle(project, runner, file_name),
        BuildType::Rbxm => rbxm(project, runner, file_name),
    }
}

/// Archive the source tree into `<out_dir>/<file_name>`
pub fn source(project: &Project, file_name: &str) -> Result<PathBuf> {
    let archive_path = project.output_path(file_name);
    let count = archive_source(
        &project.source_dir(),
        &archive_path,
        &project.config.archive_root(),
    )?;

    ui::success(&format!("Archived at '{}'", archive_path.display()));
    ui::detail(project.verbose, &format!("{count} files archived"));
    Ok(archive_path)
}

/// Bundle the staged source tree into `<out_dir>/<file_name>` with darklua
pub fn bundle(project: &Project, runner: &dyn ToolRunner, file_name: &str) -> Result<PathBuf> {
    let output_path = project.output_path(file_name);

    let staging = StagingDir::stage(&project.source_dir(), project.staging_dir())?;
    let report = staging.report();
    ui::status(
        "remove_self",
        &format!("converted to {} successfully", staging.path().display()),
    );
    ui::detail(
        project.verbose,
        &format!("{} files staged, {} requires rewritten", report.files, report.rewrites),
    );

    let invocation = darklua::process(
        &project.resolve(&project.config.darklua.bundle_config),
        &staging.path().join(&project.config.entry_point),
        &output_path,
        &project.root,
    );
    // The staging directory goes away with `staging`, whatever darklua returned
    tool::run_checked(runner, &invocation)?;
    drop(staging);

    ui::success(&format!("Bundled at '{}'", output_path.display()));
    Ok(output_path)
}

/// Compile the model project into `<out_dir>/<file_name>` with rojo
pub fn rbxm(project: &Project, runner: &dyn ToolRunner, file_name: &str) -> Result<PathBuf> {
    let output_path = project.output_path(file_name);
    let project_file = project.resolve(&project.config.rojo.model_project);

    let descriptor = rojo::read_project(&project_file)?;
    if let Some(name) = &descriptor.name {
        ui::detail(project.verbose, &format!("Building model for project '{name}'"));
    }

    let invocation = rojo::build(&output_path, &project_file, &project.root);
    tool::run_checked(runner, &invocation)?;

    ui::success(&format!("Built model at '{}'", output_path.display()));
    Ok(output_path)
}
