use std::env;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use log::debug;

use super::ExecError;

/// Replaces the whole process environment with `entries` (`KEY=VALUE` each).
///
/// Every entry is validated before anything is touched, so a malformed list leaves
/// the environment as it was. A later entry overrides an earlier one with the same key.
pub fn replace_environment<S: AsRef<OsStr>>(entries: &[S]) -> Result<(), ExecError> {
    let parsed = entries
        .iter()
        .map(|entry| split_entry(entry.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    for (key, _) in env::vars_os() {
        if is_valid_key(key.as_bytes()) {
            env::remove_var(key);
        }
    }
    for (key, value) in parsed {
        env::set_var(key, value);
    }
    debug!("Replaced environment with {} entries", entries.len());
    Ok(())
}

fn split_entry(entry: &OsStr) -> Result<(&OsStr, &OsStr), ExecError> {
    let bytes = entry.as_bytes();
    let invalid = || ExecError::InvalidEnvEntry { entry: entry.to_os_string() };

    if bytes.contains(&0) {
        return Err(invalid());
    }
    let eq = bytes.iter().position(|&b| b == b'=').ok_or_else(invalid)?;
    let (key, value) = (&bytes[..eq], &bytes[eq + 1..]);
    if !is_valid_key(key) {
        return Err(invalid());
    }
    Ok((OsStr::from_bytes(key), OsStr::from_bytes(value)))
}

fn is_valid_key(key: &[u8]) -> bool {
    !key.is_empty() && !key.contains(&b'=') && !key.contains(&0)
}
