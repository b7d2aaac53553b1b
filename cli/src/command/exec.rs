use std::convert::Infallible;

use abox_core::config::AboxConfig;
use abox_core::{DispatchConfig, Dispatcher};
use anyhow::{anyhow, Error};
use log::debug;

use crate::applet::APPLETS;
use crate::parser::sub_command::ExecArgs;
use crate::util::build_env_entries;

pub(crate) fn dispatch_config(config: &AboxConfig, args: &ExecArgs) -> DispatchConfig {
    let mut dispatch = config.dispatch;
    if args.no_prefer_applets {
        dispatch.prefer_applets = false;
    }
    if args.force_applets {
        dispatch.prefer_applets = true;
        dispatch.force_applets = true;
    }
    if args.force_noexec {
        dispatch.prefer_applets = true;
        dispatch.force_noexec = true;
    }
    dispatch
}

/// Only returns when the command could not be started.
pub fn cmd_exec(config: &AboxConfig, args: ExecArgs) -> Result<(), (i32, Error)> {
    let dispatcher = Dispatcher::new(dispatch_config(config, &args), APPLETS);
    debug!("Dispatch {:?} with {:?}", args.command, dispatcher.config());

    if args.env.is_empty() && !args.ignore_env {
        dispatcher.execute_or_terminate(&args.command);
    }

    let entries = build_env_entries(args.ignore_env, &args.env);
    let file = &args.command[0];
    let result: Result<Infallible, _> = dispatcher.execute_with_env(file, &args.command, &entries);
    let err = match result {
        Ok(never) => match never {},
        Err(err) => err,
    };
    Err((err.exit_code(), anyhow!("can't execute '{}': {err}", file.to_string_lossy())))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::sub_command::SubCommands;
    use crate::parser::CliParser;

    fn exec_args(args: &[&str]) -> ExecArgs {
        let cli = CliParser::parse_from(["abox", "exec"].iter().chain(args));
        match cli.command {
            Some(SubCommands::Exec(args)) => args,
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = AboxConfig::default();
        config.dispatch.force_applets = true;

        assert_eq!(dispatch_config(&config, &exec_args(&["ls"])), config.dispatch);
        assert_eq!(
            dispatch_config(&config, &exec_args(&["--no-prefer-applets", "ls"])),
            DispatchConfig { prefer_applets: false, force_applets: true, force_noexec: false }
        );

        config.dispatch.prefer_applets = false;
        assert_eq!(
            dispatch_config(&config, &exec_args(&["--force-noexec", "ls"])),
            DispatchConfig { prefer_applets: true, force_applets: true, force_noexec: true }
        );
    }
}
