//! Applet-aware replacement for `execvp`.
//!
//! A dispatch either replaces the running process (a re-exec, the target program, or
//! an in-process applet that exits on its own) or returns the reason it could not.
//! The returning entry points are typed `Result<Infallible, ExecError>`: `Ok` is never
//! constructed, control coming back at all means failure.

pub mod env;
mod error;
mod host;

use std::convert::Infallible;
use std::ffi::{OsStr, OsString};

pub use error::ExecError;
pub use host::{ExecHost, OsHost};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::applet::AppletRegistry;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Look the command up among the applets before exec'ing a file.
    pub prefer_applets: bool,
    /// Never exec an external file. Only honoured with `prefer_applets`.
    pub force_applets: bool,
    /// Run every applet in process, even those that would normally be re-exec'd.
    pub force_noexec: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { prefer_applets: true, force_applets: false, force_noexec: false }
    }
}

pub struct Dispatcher<R, H = OsHost> {
    config: DispatchConfig,
    registry: R,
    host: H,
}

impl<R: AppletRegistry> Dispatcher<R, OsHost> {
    pub fn new(config: DispatchConfig, registry: R) -> Self {
        Self::with_host(config, registry, OsHost)
    }
}

impl<R: AppletRegistry, H: ExecHost> Dispatcher<R, H> {
    pub fn with_host(config: DispatchConfig, registry: R, host: H) -> Self {
        Self { config, registry, host }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Runs `file` with `argv`, preferring a registered applet of that name.
    ///
    /// A no-exec applet (or any applet under `force_noexec`) runs in this process and
    /// never returns. Other applets re-exec the running image with `argv` unchanged so
    /// the new image picks the applet from `argv[0]`; should that fail, `file` itself
    /// is exec'd. Under `force_applets` an unknown name fails with "not found" without
    /// touching the exec primitive.
    pub fn execute<S: AsRef<OsStr> + ?Sized>(
        &self,
        file: &S,
        argv: &[OsString],
    ) -> Result<Infallible, ExecError> {
        let file = file.as_ref();

        if self.config.prefer_applets {
            match self.registry.lookup(file) {
                Some(applet) if self.config.force_noexec || applet.noexec => {
                    debug!("Dispatch {file:?} to in-process applet {}", applet.id);
                    self.registry.run_in_process(applet, file, argv)
                }
                Some(applet) => match self.host.self_image() {
                    Ok(image) => {
                        debug!("Dispatch {file:?} to applet {} via {image:?}", applet.id);
                        let err = self.host.exec(image.as_os_str(), argv);
                        warn!("Cannot re-exec {image:?} for {file:?}: {err}");
                    }
                    Err(err) => warn!("Cannot locate own image for {file:?}: {err}"),
                },
                None if self.config.force_applets => {
                    debug!("No applet {file:?} and external commands are disabled");
                    return Err(ExecError::AppletMissing { name: file.to_os_string() });
                }
                None => {}
            }
        }

        debug!("Exec {file:?} with {argv:?}");
        let source = self.host.exec(file, argv);
        Err(ExecError::Exec { program: file.to_os_string(), source })
    }

    /// Replaces the environment with `envp` (`KEY=VALUE` entries), then behaves like
    /// [`Dispatcher::execute`]. A malformed entry fails before the environment changes.
    pub fn execute_with_env<S: AsRef<OsStr> + ?Sized, E: AsRef<OsStr>>(
        &self,
        file: &S,
        argv: &[OsString],
        envp: &[E],
    ) -> Result<Infallible, ExecError> {
        env::replace_environment(envp)?;
        self.execute(file, argv)
    }

    /// Executes `argv[0]` and never returns. On failure the process exits with 127 if
    /// the command was not found and 126 otherwise, after a diagnostic naming it.
    pub fn execute_or_terminate(&self, argv: &[OsString]) -> ! {
        let err = match argv.first() {
            Some(file) => match self.execute(file, argv) {
                Ok(never) => match never {},
                Err(err) => err,
            },
            None => ExecError::EmptyArgv,
        };

        let name = argv.first().map(|file| file.to_string_lossy()).unwrap_or_default();
        let code = err.exit_code();
        error!("Exec of {name:?} failed with {code}: {err}");
        self.host.terminate(&format!("can't execute '{name}': {err}"), code)
    }
}
