//! External tool invocation
//!
//! darklua and rojo do the real work. This module builds their command
//! lines, runs them behind the [`ToolRunner`] seam and turns their exit status
//! into a typed result:
//! - [`darklua`]: `darklua process` invocations
//! - [`rojo`]: `rojo build` / `rojo sourcemap` invocations and project checks

pub mod darklua;
pub mod rojo;

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{Project, ToolsConfig};
use crate::error::{self, Result};
use crate::progress::ToolSpinner;
use crate::ui;

/// External tools driven by the build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Darklua,
    Rojo,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Darklua => "darklua",
            Tool::Rojo => "rojo",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One command line for an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub tool: Tool,
    pub args: Vec<OsString>,
    pub current_dir: PathBuf,
}

impl ToolInvocation {
    pub fn new(tool: Tool, current_dir: &Path) -> Self {
        Self {
            tool,
            args: Vec::new(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Arguments rendered for display
    pub fn display_args(&self) -> String {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished tool process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external tools to completion
pub trait ToolRunner {
    /// Run the invocation and capture its output. Only failing to start the
    /// process is an error here; a non-zero exit is reported in the output.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput>;
}

/// Runs tools as real subprocesses
#[derive(Debug, Clone)]
pub struct SystemToolRunner {
    darklua: PathBuf,
    rojo: PathBuf,
    verbose: bool,
}

impl SystemToolRunner {
    /// Resolve tool executables for a project
    pub fn for_project(project: &Project) -> Self {
        let tools = &project.config.tools;
        Self::new(tools, &project.root, project.verbose)
    }

    pub fn new(tools: &ToolsConfig, root: &Path, verbose: bool) -> Self {
        Self {
            darklua: resolve_program(Tool::Darklua, tools.darklua.as_deref(), root),
            rojo: resolve_program(Tool::Rojo, tools.rojo.as_deref(), root),
            verbose,
        }
    }

    pub fn program(&self, tool: Tool) -> &Path {
        match tool {
            Tool::Darklua => &self.darklua,
            Tool::Rojo => &self.rojo,
        }
    }
}

impl ToolRunner for SystemToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput> {
        let program = self.program(invocation.tool);
        ui::detail(
            self.verbose,
            &format!("$ {} {}", program.display(), invocation.display_args()),
        );

        let spinner = ToolSpinner::start(format!("Running {}...", invocation.tool));
        let output = Command::new(program)
            .args(&invocation.args)
            .current_dir(&invocation.current_dir)
            .output();
        spinner.finish();

        let output = output.map_err(|e| {
            error::tool::not_found(
                invocation.tool.name(),
                &program.display().to_string(),
                &e,
            )
        })?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Pick the executable for a tool.
///
/// An explicit path from the config wins (relative paths with a directory
/// part resolve against the project root). Otherwise the aftman install at
/// `~/.aftman/bin` is used when present, falling back to a `PATH` lookup.
pub fn resolve_program(tool: Tool, configured: Option<&Path>, root: &Path) -> PathBuf {
    if let Some(path) = configured {
        return if path.components().count() > 1 {
            root.join(path)
        } else {
            path.to_path_buf()
        };
    }

    if let Some(home) = dirs::home_dir() {
        let aftman = aftman_bin(&home, tool);
        if aftman.is_file() {
            return aftman;
        }
    }

    PathBuf::from(tool.name())
}

fn aftman_bin(home: &Path, tool: Tool) -> PathBuf {
    let bin = home.join(".aftman").join("bin");
    if cfg!(target_os = "windows") {
        bin.join(format!("{}.exe", tool.name()))
    } else {
        bin.join(tool.name())
    }
}

/// Run an invocation, echo its output and fail on a non-zero exit
pub fn run_checked(runner: &dyn ToolRunner, invocation: &ToolInvocation) -> Result<ToolOutput> {
    let output = runner.run(invocation)?;
    ui::echo_tool_output(&output.stdout, &output.stderr);

    if !output.success() {
        return Err(error::tool::failed(invocation.tool.name(), output.code));
    }
    Ok(output)
}
