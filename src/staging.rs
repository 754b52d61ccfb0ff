//! Source staging
//!
//! darklua cannot resolve `@self` require aliases, so before it runs the
//! source tree is mirrored into a staging directory with every
//! `require("@self` rewritten to the relative `require(".` form. Nothing
//! else in the files changes.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::fs::{CleanupGuard, ensure_parent_dir, recreate_dir};
use crate::error::{self, Result};

/// Self-reference require prefix
pub const SELF_REQUIRE: &str = "require(\"@self";

/// Relative replacement for [`SELF_REQUIRE`]
pub const RELATIVE_REQUIRE: &str = "require(\".";

/// What a staging run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagingReport {
    /// Files written to the destination
    pub files: usize,
    /// `@self` requires rewritten across all files
    pub rewrites: usize,
}

/// Rewrite every self-reference require in `content`.
///
/// Returns the new content and the number of replaced occurrences.
pub fn rewrite_self_requires(content: &str) -> (String, usize) {
    let count = content.matches(SELF_REQUIRE).count();
    if count == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(SELF_REQUIRE, RELATIVE_REQUIRE), count)
}

/// Mirror `source` into `destination`, rewriting self-reference requires.
///
/// Any existing `destination` is removed first. Every file is treated as
/// UTF-8 text; a file that is not aborts staging with
/// [`BuildError::FileDecodeFailed`](crate::error::BuildError::FileDecodeFailed)
/// and leaves whatever was already written in place.
pub fn stage_source(source: &Path, destination: &Path) -> Result<StagingReport> {
    if !source.is_dir() {
        return Err(error::fs::source_not_found(source));
    }

    recreate_dir(destination)?;

    let mut report = StagingReport::default();
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| error::fs::io_error(e.to_string()))?;
        // Symlinked files are read through the link
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);

        report.rewrites += stage_file(path, &target)?;
        report.files += 1;
    }

    Ok(report)
}

fn stage_file(source: &Path, target: &Path) -> Result<usize> {
    let bytes = fs::read(source).map_err(|e| error::fs::read_failed(source, &e))?;
    let content = String::from_utf8(bytes).map_err(|_| error::fs::decode_failed(source))?;
    let (rewritten, count) = rewrite_self_requires(&content);

    ensure_parent_dir(target)?;
    fs::write(target, rewritten).map_err(|e| error::fs::write_failed(target, &e))?;
    Ok(count)
}

/// A staged copy of the source tree that is removed when dropped.
///
/// The guard is armed before staging starts, so a staging failure cleans up
/// the partial tree as well.
#[derive(Debug)]
pub struct StagingDir {
    guard: CleanupGuard,
    report: StagingReport,
}

impl StagingDir {
    /// Stage `source` into `path`
    pub fn stage(source: &Path, path: PathBuf) -> Result<Self> {
        let guard = CleanupGuard::new(path);
        let report = stage_source(source, guard.path())?;
        Ok(Self { guard, report })
    }

    pub fn path(&self) -> &Path {
        self.guard.path()
    }

    pub fn report(&self) -> StagingReport {
        self.report
    }
}
