//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Provides temp directories populated with files, a way to read a tree back
//! for comparison, and [`FakeToolRunner`], which stands in for darklua and
//! rojo so command tests never need the real binaries.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_test_files, FakeToolRunner};
//!
//! let temp = create_temp_dir();
//! create_test_files(&temp, &[("src/init.luau", "return nil")]);
//!
//! let runner = FakeToolRunner::new();
//! runner.push_output(1, "", "error: bad config");
//! ```

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use crate::error::Result;
use crate::tool::{ToolInvocation, ToolOutput, ToolRunner};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples and creates those files.
/// Paths are relative to the provided base directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Read every file under `root` as `(relative path, bytes)`, sorted by path
///
/// # Panics
///
/// Panics if the tree cannot be read.
#[must_use]
pub fn read_tree(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.expect("Failed to walk tree"))
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = crate::common::fs::relative_slash_path(root, entry.path())
                .expect("Entry outside of root");
            let content = std::fs::read(entry.path()).expect("Failed to read file");
            (relative, content)
        })
        .collect();
    files.sort();
    files
}

/// Write an executable shell script into the temp directory
///
/// # Panics
///
/// Panics if the script cannot be written.
#[cfg(unix)]
pub fn write_script(temp: &TempDir, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = temp.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}")).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

type RunHook = Box<dyn Fn(&ToolInvocation)>;

/// Records tool invocations and replays scripted outputs.
///
/// Outputs queued with [`push_output`](Self::push_output) are returned in
/// order; once the queue is empty every run succeeds with no output.
#[derive(Default)]
pub struct FakeToolRunner {
    invocations: RefCell<Vec<ToolInvocation>>,
    outputs: RefCell<VecDeque<ToolOutput>>,
    hook: Option<RunHook>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `hook` during every run, before the output is returned
    #[must_use]
    pub fn on_run(mut self, hook: impl Fn(&ToolInvocation) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Queue the result of the next run
    pub fn push_output(&self, code: i32, stdout: &str, stderr: &str) {
        self.outputs.borrow_mut().push_back(ToolOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        });
    }

    /// Invocations seen so far, in order
    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.invocations.borrow().clone()
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput> {
        self.invocations.borrow_mut().push(invocation.clone());
        if let Some(hook) = &self.hook {
            hook(invocation);
        }
        Ok(self.outputs.borrow_mut().pop_front().unwrap_or(ToolOutput {
            code: Some(0),
            ..ToolOutput::default()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::Tool;

    #[test]
    fn test_create_test_files_and_read_tree() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("b/c.lua", "c"), ("a.lua", "a")]);
        assert_eq!(
            read_tree(temp.path()),
            vec![
                ("a.lua".to_string(), b"a".to_vec()),
                ("b/c.lua".to_string(), b"c".to_vec()),
            ]
        );
    }

    #[test]
    fn test_fake_runner_replays_outputs_then_succeeds() {
        let runner = FakeToolRunner::new();
        runner.push_output(5, "x", "y");
        let inv = ToolInvocation::new(Tool::Rojo, Path::new("/p"));

        let first = runner.run(&inv).unwrap();
        assert_eq!(first.code, Some(5));
        assert_eq!(first.stdout, "x");

        let second = runner.run(&inv).unwrap();
        assert!(second.success());
        assert_eq!(runner.invocations().len(), 2);
    }
}
