use std::ffi::OsString;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use crate::constants::AboxExitCode;

pub(crate) fn true_main(_: &[OsString]) -> i32 {
    AboxExitCode::Success.into()
}

pub(crate) fn false_main(_: &[OsString]) -> i32 {
    AboxExitCode::Error.into()
}

/// `echo [-n] ARG...`
pub(crate) fn echo_main(argv: &[OsString]) -> i32 {
    let mut stdout = io::stdout().lock();
    match write_echo(&mut stdout, argv.get(1..).unwrap_or_default()) {
        Ok(()) => AboxExitCode::Success.into(),
        Err(_) => AboxExitCode::Error.into(),
    }
}

fn write_echo<W: Write>(out: &mut W, args: &[OsString]) -> io::Result<()> {
    let (newline, args) = match args.split_first() {
        Some((first, rest)) if first == "-n" => (false, rest),
        _ => (true, args),
    };
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(arg.as_bytes())?;
    }
    if newline {
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(args: &[&str]) -> String {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        let mut out = Vec::new();
        write_echo(&mut out, &args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_echo_joins_with_spaces() {
        assert_eq!(echo(&["hello", "world"]), "hello world\n");
        assert_eq!(echo(&[]), "\n");
        assert_eq!(echo(&["-n", "a", "b"]), "a b");
        assert_eq!(echo(&["a", "-n"]), "a -n\n");
    }

    #[test]
    fn test_true_and_false() {
        assert_eq!(true_main(&[]), 0);
        assert_eq!(false_main(&["false".into()]), 1);
    }
}
