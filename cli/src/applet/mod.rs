mod basic;
mod which;

use std::ffi::{OsStr, OsString};

use abox_core::{AppletEntry, AppletRegistry, AppletTable};

use crate::util::invoked_name;

pub(crate) static APPLETS: AppletTable = AppletTable::new(&[
    AppletEntry { name: "echo", noexec: false, main: basic::echo_main },
    AppletEntry { name: "false", noexec: true, main: basic::false_main },
    AppletEntry { name: "true", noexec: true, main: basic::true_main },
    AppletEntry { name: "which", noexec: true, main: which::which_main },
]);

/// Whether `argv[0]` names an applet.
pub(crate) fn is_invoked(argv: &[OsString]) -> bool {
    argv.first().is_some_and(|arg0| APPLETS.lookup(invoked_name(arg0)).is_some())
}

/// Runs the applet named by `argv[0]`, if any, and returns its exit status.
pub(crate) fn run_invoked(argv: &[OsString]) -> Option<i32> {
    let name = invoked_name(argv.first()?);
    run_named(name, argv)
}

pub(crate) fn run_named(name: &OsStr, argv: &[OsString]) -> Option<i32> {
    let applet = APPLETS.lookup(name)?;
    APPLETS.run(applet, argv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_sorted_and_unique() {
        let names: Vec<_> = APPLETS.entries().iter().map(|entry| entry.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_run_by_argv0_basename() {
        let argv: Vec<OsString> = vec!["/opt/abox/true".into()];
        assert_eq!(run_invoked(&argv), Some(0));
        let argv: Vec<OsString> = vec!["false".into()];
        assert_eq!(run_invoked(&argv), Some(1));
        let argv: Vec<OsString> = vec!["abox".into()];
        assert_eq!(run_invoked(&argv), None);
        assert_eq!(run_invoked(&[]), None);
    }

    #[test]
    fn test_is_invoked() {
        assert!(is_invoked(&["/usr/bin/which".into()]));
        assert!(!is_invoked(&["abox".into(), "which".into()]));
        assert!(!is_invoked(&[]));
    }
}
