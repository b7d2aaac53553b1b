use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::io;

use nix::errno::Errno;

use crate::constants::exit_codes::{NOT_EXECUTABLE, NOT_FOUND};

/// Why a dispatch returned control to its caller.
#[derive(Debug)]
pub enum ExecError {
    /// The exec primitive returned instead of replacing the process.
    Exec { program: OsString, source: io::Error },
    /// Applet-only dispatch found no applet under this name.
    AppletMissing { name: OsString },
    /// Nothing to execute.
    EmptyArgv,
    /// An environment entry is not of the form `KEY=VALUE`.
    InvalidEnvEntry { entry: OsString },
}

impl ExecError {
    /// OS error number equivalent to this failure.
    pub fn raw_os_error(&self) -> Option<i32> {
        use ExecError::*;
        match self {
            Exec { source, .. } => source.raw_os_error(),
            AppletMissing { .. } | EmptyArgv => Some(Errno::ENOENT as i32),
            InvalidEnvEntry { .. } => Some(Errno::EINVAL as i32),
        }
    }

    pub fn is_not_found(&self) -> bool {
        use ExecError::*;
        match self {
            Exec { source, .. } => source.kind() == io::ErrorKind::NotFound,
            AppletMissing { .. } | EmptyArgv => true,
            InvalidEnvEntry { .. } => false,
        }
    }

    /// 127 when the command was not found, 126 for every other failure.
    pub fn exit_code(&self) -> i32 {
        if self.is_not_found() {
            NOT_FOUND
        } else {
            NOT_EXECUTABLE
        }
    }
}

impl Display for ExecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use ExecError::*;
        match self {
            Exec { source, .. } => write!(f, "{source}"),
            AppletMissing { name } => {
                write!(f, "No applet named '{}'", name.to_string_lossy())
            }
            EmptyArgv => write!(f, "Empty argument vector"),
            InvalidEnvEntry { entry } => {
                write!(f, "Invalid environment entry '{}'", entry.to_string_lossy())
            }
        }
    }
}

impl Error for ExecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExecError::Exec { source, .. } => Some(source),
            _ => None,
        }
    }
}
