//! # Command Line Interface
//!
//! The subcommands are defined in `cli.rs` and run by the `commands` module.

mod cli;

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use dragonkit::commands;
use dragonkit::commands::CommandError;
use dragonkit::STDRESULT;

fn main() -> STDRESULT
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);
    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("tokenize",cmd)) => commands::langx::tokenize(cmd),
        Some(("detokenize",cmd)) => commands::langx::detokenize(cmd),
        Some(("inspect",cmd)) => commands::langx::inspect(cmd),
        Some(("renumber",cmd)) => commands::langx::renumber(cmd),
        Some(("destinations",cmd)) => commands::langx::destinations(cmd),
        Some(("reformat",cmd)) => commands::langx::reformat(cmd),
        Some(("pack",cmd)) => commands::pack::pack(cmd),
        Some(("unpack",cmd)) => commands::pack::unpack(cmd),
        Some(("meta",cmd)) => commands::pack::meta(cmd),
        _ => {
            error!("No subcommand was found, try `dragonkit --help`");
            Err(Box::new(CommandError::InvalidCommand))
        }
    }
}
