use std::ffi::OsString;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    /// Execute a command, preferring a built-in applet of the same name.
    Exec(ExecArgs),

    /// Exit successfully if the command resolves to an executable along $PATH.
    Exists {
        /// Command name to look up.
        name: OsString,
    },

    /// List the built-in applets.
    List,

    /// Run a built-in applet: `abox APPLET [ARGS]...`.
    #[command(external_subcommand)]
    Applet(Vec<OsString>),
}

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Add or override an environment variable for the command.
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<OsString>,

    /// Start from an empty environment.
    #[arg(short = 'i', long = "ignore-environment")]
    pub ignore_env: bool,

    /// Always exec the external file, even if an applet has the same name.
    #[arg(long = "no-prefer-applets")]
    pub no_prefer_applets: bool,

    /// Refuse to exec anything but applets.
    #[arg(long = "force-applets", conflicts_with = "no_prefer_applets")]
    pub force_applets: bool,

    /// Run every applet inside this process.
    #[arg(long = "force-noexec", conflicts_with = "no_prefer_applets")]
    pub force_noexec: bool,

    /// Command and its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<OsString>,
}
