use std::ffi::OsStr;

use abox_core::exists_in_path;
use anyhow::{anyhow, Error};

use crate::constants::AboxExitCode;

pub fn cmd_exists(name: &OsStr) -> Result<(), (i32, Error)> {
    if exists_in_path(name) {
        Ok(())
    } else {
        Err((AboxExitCode::Error.into(), anyhow!("{}: not found", name.to_string_lossy())))
    }
}
