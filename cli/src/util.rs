use std::env;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Last path component of `argv[0]`, the name a multi-call binary was invoked as.
pub(crate) fn invoked_name(arg0: &OsStr) -> &OsStr {
    Path::new(arg0).file_name().unwrap_or(arg0)
}

/// `KEY=VALUE` entries for the environment `exec` should run under: the inherited
/// one unless `ignore_env`, followed by `overrides`.
pub(crate) fn build_env_entries(ignore_env: bool, overrides: &[OsString]) -> Vec<OsString> {
    let mut entries = Vec::new();
    if !ignore_env {
        for (key, value) in env::vars_os() {
            let mut entry = key;
            entry.push("=");
            entry.push(value);
            entries.push(entry);
        }
    }
    entries.extend(overrides.iter().cloned());
    entries
}

pub(crate) fn contains_slash(name: &OsStr) -> bool {
    name.as_bytes().contains(&b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoked_name_strips_directories() {
        assert_eq!(invoked_name(OsStr::new("/usr/local/bin/which")), OsStr::new("which"));
        assert_eq!(invoked_name(OsStr::new("echo")), OsStr::new("echo"));
        assert_eq!(invoked_name(OsStr::new("")), OsStr::new(""));
    }

    #[test]
    fn test_overrides_come_last() {
        let entries = build_env_entries(true, &["A=1".into(), "B=2".into()]);
        assert_eq!(entries, vec![OsString::from("A=1"), OsString::from("B=2")]);

        let inherited = build_env_entries(false, &["ZZZ=1".into()]);
        assert_eq!(inherited.last(), Some(&OsString::from("ZZZ=1")));
        assert_eq!(inherited.len(), env::vars_os().count() + 1);
    }

    #[test]
    fn test_slash_detection() {
        assert!(contains_slash(OsStr::new("./tool")));
        assert!(!contains_slash(OsStr::new("tool")));
    }
}
