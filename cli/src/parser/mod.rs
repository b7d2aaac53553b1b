pub(crate) mod sub_command;

use std::process;

use abox_core::config::AboxConfig;
use anyhow::{anyhow, Error};
use clap::{CommandFactory, Parser};
use sub_command::SubCommands;

use crate::constants::{AboxExitCode, PROGRAM_NAME};
use crate::{applet, command};

#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    about = "Multi-call command runtime with applet-aware exec",
    version
)]
pub struct CliParser {
    #[command(subcommand)]
    pub command: Option<SubCommands>,
}

pub fn handle_cli(config: AboxConfig, cli: CliParser) -> Result<(), (i32, Error)> {
    match cli.command {
        Some(SubCommands::Exec(args)) => command::exec::cmd_exec(&config, args),
        Some(SubCommands::Exists { name }) => command::exists::cmd_exists(&name),
        Some(SubCommands::List) => command::list::cmd_list(),
        Some(SubCommands::Applet(argv)) => {
            let Some(name) = argv.first() else {
                return Err((AboxExitCode::InvalidArgs.into(), anyhow!("No applet given")));
            };
            match applet::run_named(name, &argv) {
                Some(code) => process::exit(code),
                None => Err((
                    AboxExitCode::CommandNotFound.into(),
                    anyhow!("{}: applet not found", name.to_string_lossy()),
                )),
            }
        }
        None => {
            CliParser::command()
                .print_help()
                .map_err(|e| (AboxExitCode::Error.into(), e.into()))?;
            Ok(())
        }
    }
}
