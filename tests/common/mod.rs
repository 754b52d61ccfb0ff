//! Common test utilities for luau-build integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Stand-in for darklua: copies the input (file or directory) to the output
/// and logs its arguments. Exits with `$FAKE_DARKLUA_EXIT` when set.
pub const FAKE_DARKLUA: &str = r#"printf '%s\n' "$@" >> "$(dirname "$0")/darklua.log"
if [ -n "$FAKE_DARKLUA_EXIT" ]; then
  echo "darklua: simulated failure" >&2
  exit "$FAKE_DARKLUA_EXIT"
fi
if [ -d "$4" ]; then
  mkdir -p "$5"
  cp -R "$4"/. "$5"
else
  cp "$4" "$5"
fi
echo "darklua: processed $4"
"#;

/// Stand-in for rojo: `build` writes a fake model, `sourcemap` writes `{}`.
pub const FAKE_ROJO: &str = r#"printf '%s\n' "$@" >> "$(dirname "$0")/rojo.log"
case "$1" in
  build)
    printf 'RBXM' > "$3"
    echo "Built project to $3"
    ;;
  sourcemap)
    printf '{}' > "$4"
    ;;
  *)
    exit 2
    ;;
esac
"#;

/// A temporary Luau project for integration tests
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new, empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file or directory exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Install shell-script stand-ins for darklua and rojo and point the
    /// project config at them
    #[cfg(unix)]
    pub fn install_fake_tools(&self) {
        let darklua = self.write_script("tools/darklua", FAKE_DARKLUA);
        let rojo = self.write_script("tools/rojo", FAKE_ROJO);
        self.write_file(
            "luau-build.yaml",
            &format!(
                "tools:\n  darklua: {}\n  rojo: {}\n",
                darklua.display(),
                rojo.display()
            ),
        );
    }

    #[cfg(unix)]
    fn write_script(&self, path: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        self.write_file(path, &format!("#!/bin/sh\n{body}"));
        let full = self.path.join(path);
        std::fs::set_permissions(&full, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        full
    }

    /// Lines logged by a fake tool
    pub fn tool_log(&self, tool: &str) -> Vec<String> {
        let log = self.path.join("tools").join(format!("{tool}.log"));
        std::fs::read_to_string(log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// `luau-build` command running inside the project root
#[allow(deprecated)]
pub fn build_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("luau-build").expect("luau-build binary");
    cmd.current_dir(root)
        .env_remove("LUAU_BUILD_ROOT")
        .env_remove("LUAU_BUILD_CONFIG");
    cmd
}

/// `luau-convert` command running inside the project root
#[allow(deprecated)]
pub fn convert_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("luau-convert").expect("luau-convert binary");
    cmd.current_dir(root)
        .env_remove("LUAU_BUILD_ROOT")
        .env_remove("LUAU_BUILD_CONFIG");
    cmd
}

/// Read every entry of a zip archive as `(name, content)`
pub fn read_zip(path: &Path) -> Vec<(String, String)> {
    use std::io::Read;

    let file = std::fs::File::open(path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).expect("Failed to read entry");
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .expect("Failed to read entry content");
        entries.push((entry.name().to_string(), content));
    }
    entries
}

/// Number of entries directly inside a directory
pub fn dir_entry_count(path: &Path) -> usize {
    std::fs::read_dir(path).map(Iterator::count).unwrap_or(0)
}
