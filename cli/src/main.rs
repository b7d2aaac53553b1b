mod applet;
mod command;
mod constants;
mod parser;
mod util;

use std::env;
use std::ffi::OsString;
use std::process;

use abox_core::config::loader::load_config_or_default;
use abox_core::config::{default_config_path, AboxConfig};
use abox_core::util::log::{init_logger, level_from_env, set_log_level};
use clap::Parser;
use constants::AboxExitCode;
use parser::CliParser;

fn main() {
    let args: Vec<OsString> = env::args_os().collect();
    let config_path = default_config_path();
    let config = load_config_or_default(&config_path);

    // Applets reached through argv[0] run even when the config is unreadable.
    if applet::is_invoked(&args) {
        setup_logger(config.as_ref().unwrap_or(&AboxConfig::default()));
        if let Some(code) = applet::run_invoked(&args) {
            process::exit(code);
        }
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config file {config_path:?}: {e:#}");
            process::exit(AboxExitCode::ConfigError.into());
        }
    };
    setup_logger(&config);
    process_cli(config, args);
}

fn setup_logger(config: &AboxConfig) {
    if let Err(e) = init_logger() {
        eprintln!("Failed to initialize logger: {e}");
    }
    set_log_level(level_from_env(config.log.level_filter()));
}

fn process_cli(config: AboxConfig, args: Vec<OsString>) {
    let cli_args = CliParser::parse_from(args);

    if let Err((code, e)) = parser::handle_cli(config, cli_args) {
        eprintln!("{e}");
        process::exit(code);
    }
}
