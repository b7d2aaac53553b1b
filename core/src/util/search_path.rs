//! Incremental executable lookup over a colon separated search path.
//!
//! An empty component (`a::b`, a leading `:` or a trailing `:`) is the legacy POSIX
//! spelling of the current directory. For such a component the candidate is the bare
//! name, not `./name` and not an absolute path.

use std::env;
use std::ffi::{OsStr, OsString};
use std::iter::FusedIterator;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use log::trace;

use crate::constants::default_constants::{PATH_DELIMITER, PATH_VAR};
use crate::util::fs_util::is_executable;

/// Position of the not yet scanned part of a [`SearchPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Byte offset of the next component.
    Offset(usize),
    /// No component is left. Resolving from here always yields nothing.
    Exhausted,
}

impl Cursor {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Cursor::Exhausted)
    }
}

/// Borrowed view of a search path such as `$PATH`. The resolver never copies or
/// mutates it, it only reads components starting at a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPath<'a> {
    raw: Option<&'a [u8]>,
}

impl<'a> SearchPath<'a> {
    pub fn new<S: AsRef<OsStr> + ?Sized>(raw: &'a S) -> Self {
        Self { raw: Some(raw.as_ref().as_bytes()) }
    }

    /// A search path that was never set. Its cursor starts out exhausted.
    pub fn unset() -> Self {
        Self { raw: None }
    }

    pub fn from_option(raw: Option<&'a OsStr>) -> Self {
        match raw {
            Some(raw) => Self::new(raw),
            None => Self::unset(),
        }
    }

    /// Cursor at the first component.
    pub fn cursor(&self) -> Cursor {
        match self.raw {
            Some(_) => Cursor::Offset(0),
            None => Cursor::Exhausted,
        }
    }

    /// Finds the next executable `name` at or after `cursor`.
    ///
    /// On a match, returns the candidate together with a cursor positioned at the
    /// component following the matching one (or [`Cursor::Exhausted`] if it was the
    /// last). Passing that cursor back continues the scan, which is how every match
    /// can be enumerated. Without a match the returned cursor is exhausted.
    pub fn resolve_next<S: AsRef<OsStr> + ?Sized>(
        &self,
        name: &S,
        cursor: Cursor,
    ) -> (Option<PathBuf>, Cursor) {
        let name = name.as_ref();
        let (Some(raw), Cursor::Offset(mut start)) = (self.raw, cursor) else {
            return (None, Cursor::Exhausted);
        };

        loop {
            let Some(rest) = raw.get(start..) else {
                return (None, Cursor::Exhausted);
            };
            let (component, next) = match rest.iter().position(|&b| b == PATH_DELIMITER) {
                Some(len) => (&rest[..len], Cursor::Offset(start + len + 1)),
                None => (rest, Cursor::Exhausted),
            };

            let candidate = candidate_path(component, name);
            if is_executable(&candidate) {
                trace!("Resolved {name:?} to {candidate:?}");
                return (Some(candidate), next);
            }
            trace!("Skip candidate {candidate:?}");

            match next {
                Cursor::Offset(offset) => start = offset,
                Cursor::Exhausted => return (None, Cursor::Exhausted),
            }
        }
    }

    /// Every executable `name` along the path, in search order.
    pub fn executables<'n, S: AsRef<OsStr> + ?Sized>(&self, name: &'n S) -> Executables<'a, 'n> {
        Executables { search_path: *self, name: name.as_ref(), cursor: self.cursor() }
    }
}

fn candidate_path(component: &[u8], name: &OsStr) -> PathBuf {
    if component.is_empty() {
        return PathBuf::from(name);
    }
    let mut candidate = OsString::with_capacity(component.len() + 1 + name.len());
    candidate.push(OsStr::from_bytes(component));
    candidate.push("/");
    candidate.push(name);
    PathBuf::from(candidate)
}

/// Iterator driving [`SearchPath::resolve_next`] until the cursor is exhausted.
#[derive(Debug, Clone)]
pub struct Executables<'a, 'n> {
    search_path: SearchPath<'a>,
    name: &'n OsStr,
    cursor: Cursor,
}

impl Iterator for Executables<'_, '_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        let (found, next) = self.search_path.resolve_next(self.name, self.cursor);
        self.cursor = next;
        found
    }
}

impl FusedIterator for Executables<'_, '_> {}

/// Whether `name` resolves to an executable along the inherited `$PATH`.
/// An unset `$PATH` never matches.
pub fn exists_in_path<S: AsRef<OsStr> + ?Sized>(name: &S) -> bool {
    let path = env::var_os(PATH_VAR);
    let search_path = SearchPath::from_option(path.as_deref());
    let (found, _) = search_path.resolve_next(name, search_path.cursor());
    found.is_some()
}
