//! Applet registry contract and a static-table registry.

use std::ffi::{OsStr, OsString};
use std::fmt::{Display, Formatter};
use std::process;

use log::debug;

/// Opaque handle of a registered applet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppletId(pub usize);

impl Display for AppletId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a successful registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applet {
    pub id: AppletId,
    /// Must run inside the current process image instead of a re-exec.
    pub noexec: bool,
}

pub trait AppletRegistry {
    fn lookup(&self, name: &OsStr) -> Option<Applet>;

    /// Runs `applet` inside the current process and terminates it with the applet's
    /// status. `invoked_as` is the name the command was requested under.
    fn run_in_process(&self, applet: Applet, invoked_as: &OsStr, argv: &[OsString]) -> !;
}

/// Entry point of an applet: receives the full argument vector, returns its exit status.
pub type AppletMain = fn(&[OsString]) -> i32;

#[derive(Clone, Copy)]
pub struct AppletEntry {
    pub name: &'static str,
    pub noexec: bool,
    pub main: AppletMain,
}

impl std::fmt::Debug for AppletEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppletEntry")
            .field("name", &self.name)
            .field("noexec", &self.noexec)
            .finish()
    }
}

/// Registry over a fixed slice of entries. An applet's id is its index in the slice.
#[derive(Debug, Clone, Copy)]
pub struct AppletTable {
    entries: &'static [AppletEntry],
}

impl AppletTable {
    pub const fn new(entries: &'static [AppletEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [AppletEntry] {
        self.entries
    }

    pub fn entry(&self, id: AppletId) -> Option<&'static AppletEntry> {
        self.entries.get(id.0)
    }

    /// Runs the applet's main and hands its status back instead of exiting.
    pub fn run(&self, applet: Applet, argv: &[OsString]) -> Option<i32> {
        self.entry(applet.id).map(|entry| (entry.main)(argv))
    }
}

impl AppletRegistry for AppletTable {
    fn lookup(&self, name: &OsStr) -> Option<Applet> {
        let name = name.to_str()?;
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| Applet { id: AppletId(index), noexec: self.entries[index].noexec })
    }

    fn run_in_process(&self, applet: Applet, invoked_as: &OsStr, argv: &[OsString]) -> ! {
        debug!("Run applet {} in process as {invoked_as:?}", applet.id);
        let code = self.run(applet, argv).unwrap_or(crate::constants::exit_codes::NOT_FOUND);
        process::exit(code)
    }
}
