use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::env::temp_dir;
use tempfile::TempDir;

pub(crate) fn gen_unique_temp_dir() -> (TempDir, PathBuf) {
    let base_dir = temp_dir().join("abox-test");
    if !base_dir.exists() {
        let _ = fs::create_dir(&base_dir);
    }
    let dir = TempDir::new_in(base_dir).unwrap();
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Creates `dir/name` containing a trivial shell script with the given mode.
pub(crate) fn create_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

pub(crate) fn create_dirs(base: &Path, dirs: &[&str]) -> Vec<PathBuf> {
    dirs.iter()
        .map(|dir| {
            let path = base.join(dir);
            fs::create_dir_all(&path).unwrap();
            path
        })
        .collect()
}

/// Switches the current directory for the lifetime of the guard.
pub(crate) struct CurrentDirGuard {
    previous: PathBuf,
}

impl CurrentDirGuard {
    pub(crate) fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Snapshot of the whole process environment, restored on drop.
pub(crate) struct EnvSnapshot {
    vars: Vec<(std::ffi::OsString, std::ffi::OsString)>,
}

impl EnvSnapshot {
    pub(crate) fn take() -> Self {
        Self { vars: std::env::vars_os().collect() }
    }
}

impl Drop for EnvSnapshot {
    fn drop(&mut self) {
        for (key, _) in std::env::vars_os() {
            std::env::remove_var(key);
        }
        for (key, value) in &self.vars {
            std::env::set_var(key, value);
        }
    }
}
