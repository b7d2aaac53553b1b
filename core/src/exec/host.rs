use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{self, Command};

/// Process-level facilities the dispatcher relies on.
pub trait ExecHost {
    /// Path of the running binary image, used to re-exec into an applet.
    fn self_image(&self) -> io::Result<PathBuf>;

    /// Replaces the process image with `program`, searching `$PATH` when the name has
    /// no slash. `argv[0]` is passed through verbatim. Only ever returns on failure.
    fn exec(&self, program: &OsStr, argv: &[OsString]) -> io::Error;

    /// Emits `message` as a diagnostic and exits with `code`.
    fn terminate(&self, message: &str, code: i32) -> !;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsHost;

impl ExecHost for OsHost {
    fn self_image(&self) -> io::Result<PathBuf> {
        env::current_exe()
    }

    fn exec(&self, program: &OsStr, argv: &[OsString]) -> io::Error {
        let mut command = Command::new(program);
        if let Some((arg0, args)) = argv.split_first() {
            command.arg0(arg0).args(args);
        }
        command.exec()
    }

    fn terminate(&self, message: &str, code: i32) -> ! {
        log::logger().flush();
        eprintln!("{}: {message}", program_name());
        process::exit(code)
    }
}

fn program_name() -> String {
    env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "abox".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_image_exists() {
        let image = OsHost.self_image().unwrap();
        assert!(image.is_absolute());
        assert!(crate::util::fs_util::is_executable(&image));
    }

    #[test]
    fn test_failed_exec_returns_error() {
        let err = OsHost.exec(
            OsStr::new("/nonexistent/abox-tool"),
            &["abox-tool".into(), "-v".into()],
        );
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
