use std::fs;
use std::path::{Path, PathBuf};

use log::trace;
use nix::unistd::{access, AccessFlags};

/// Reports whether `path` names a regular file the caller may execute.
///
/// Both the `access(X_OK)` permission check and the `stat` type check must pass, so
/// a directory or device node with execute bits set is rejected. Any OS error from
/// either check is treated as "not executable".
pub fn is_executable<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if let Err(err) = access(path, AccessFlags::X_OK) {
        trace!("{path:?} not executable: {err}");
        return false;
    }

    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file(),
        Err(err) => {
            trace!("Cannot stat {path:?}: {err}");
            false
        }
    }
}

pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or(PathBuf::from("~"))
}
