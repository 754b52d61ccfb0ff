//! Source archives
//!
//! Packs the source tree into a deflate-compressed zip whose entries all sit
//! under one top-level folder, so extracting it always produces the same
//! directory name.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::common::fs::relative_slash_path;
use crate::error::{self, Result};

/// Write every file under `source` into a zip at `archive_path`.
///
/// Entries are named `<root>/<relative path>` with `/` separators and are
/// added in file-name order, so the same tree always yields the same entry
/// list. An existing archive at `archive_path` is replaced.
///
/// Returns the number of files archived.
pub fn archive_source(source: &Path, archive_path: &Path, root: &str) -> Result<usize> {
    if !source.is_dir() {
        return Err(error::fs::source_not_found(source));
    }

    if archive_path.exists() {
        fs::remove_file(archive_path).map_err(|e| error::fs::write_failed(archive_path, &e))?;
    }

    let file = File::create(archive_path).map_err(|e| error::fs::write_failed(archive_path, &e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| error::fs::io_error(e.to_string()))?;
        // Symlinked files are read through the link
        if !entry.path().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(relative) = relative_slash_path(source, path) else {
            continue;
        };
        let name = format!("{root}/{relative}");

        let content = fs::read(path).map_err(|e| error::fs::read_failed(path, &e))?;
        zip.start_file(name, options)
            .map_err(|e| error::fs::archive_failed(archive_path, e.to_string()))?;
        zip.write_all(&content)
            .map_err(|e| error::fs::archive_failed(archive_path, e.to_string()))?;
        count += 1;
    }

    let mut writer = zip
        .finish()
        .map_err(|e| error::fs::archive_failed(archive_path, e.to_string()))?;
    writer
        .flush()
        .map_err(|e| error::fs::archive_failed(archive_path, e.to_string()))?;

    Ok(count)
}
