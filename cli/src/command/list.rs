use std::io::{self, Write};

use anyhow::Error;

use crate::applet::APPLETS;
use crate::constants::AboxExitCode;

pub fn cmd_list() -> Result<(), (i32, Error)> {
    let mut stdout = io::stdout().lock();
    for entry in APPLETS.entries() {
        let mode = if entry.noexec { "noexec" } else { "exec" };
        writeln!(stdout, "{}\t{mode}", entry.name)
            .map_err(|e| (AboxExitCode::Error.into(), e.into()))?;
    }
    Ok(())
}
