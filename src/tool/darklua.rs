//! darklua invocations

use std::path::Path;

use super::{Tool, ToolInvocation};

/// `darklua process -c <config> <input> <output>`
///
/// `input` is either a single entry file (bundling) or a directory (require
/// conversion); darklua decides from the config what to do with it.
pub fn process(config: &Path, input: &Path, output: &Path, current_dir: &Path) -> ToolInvocation {
    ToolInvocation::new(Tool::Darklua, current_dir)
        .arg("process")
        .arg("-c")
        .arg(config)
        .arg(input)
        .arg(output)
}
