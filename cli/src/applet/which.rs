use std::env;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::PathBuf;

use abox_core::constants::default_constants::PATH_VAR;
use abox_core::{is_executable, SearchPath};
use clap::Parser;
use log::debug;

use crate::constants::AboxExitCode;
use crate::util::contains_slash;

#[derive(Parser, Debug)]
#[command(name = "which", about = "Locate commands along $PATH")]
struct WhichArgs {
    /// Print every match, not just the first.
    #[arg(short = 'a')]
    all: bool,

    /// Command names to look up.
    #[arg(required = true)]
    names: Vec<OsString>,
}

pub(crate) fn which_main(argv: &[OsString]) -> i32 {
    let args = match WhichArgs::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code =
                if e.use_stderr() { AboxExitCode::InvalidArgs } else { AboxExitCode::Success };
            return code.into();
        }
    };

    let path = env::var_os(PATH_VAR);
    let search_path = SearchPath::from_option(path.as_deref());
    let mut stdout = io::stdout().lock();
    match write_matches(&mut stdout, &search_path, &args.names, args.all) {
        Ok(true) => AboxExitCode::Success.into(),
        Ok(false) | Err(_) => AboxExitCode::Error.into(),
    }
}

/// Prints the matches of every name, one per line. `Ok(false)` if some name had none.
fn write_matches<W: Write>(
    out: &mut W,
    search_path: &SearchPath<'_>,
    names: &[OsString],
    all: bool,
) -> io::Result<bool> {
    let mut all_found = true;
    for name in names {
        let found = which(search_path, name, all);
        if found.is_empty() {
            debug!("{name:?} not found");
            all_found = false;
        }
        for path in found {
            writeln!(out, "{}", path.display())?;
        }
    }
    out.flush()?;
    Ok(all_found)
}

/// Names containing a slash are checked as given, everything else is searched for.
pub(crate) fn which(search_path: &SearchPath<'_>, name: &OsStr, all: bool) -> Vec<PathBuf> {
    if contains_slash(name) {
        return if is_executable(name) { vec![PathBuf::from(name)] } else { Vec::new() };
    }

    let mut matches = search_path.executables(name);
    if all {
        matches.collect()
    } else {
        matches.next().into_iter().collect()
    }
}
