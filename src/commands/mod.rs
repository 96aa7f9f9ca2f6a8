//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.
//! Every subcommand reads stdin and writes stdout, so they can be chained in a pipeline.

pub mod langx;
pub mod pack;

use std::io::Read;
use std::str::FromStr;
use clap::parser::ValueSource;
use colored::Colorize;
use crate::lang::basic::{Basic,Machine};
use crate::lang::basic::settings::{self,Settings};
use crate::lang::Diagnostic;
use crate::DYNERR;

const RCH: &str = "unreachable was reached";

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("One of the parameters was out of range")]
    OutOfRange
}

/// Parse an address, decimal or hex with `$` or `0x` prefix
pub fn parse_addr(s: &str) -> Result<u16,CommandError> {
    let res = if let Some(hex) = s.strip_prefix('$') {
        u16::from_str_radix(hex,16)
    } else if let Some(hex) = s.strip_prefix("0x").or(s.strip_prefix("0X")) {
        u16::from_str_radix(hex,16)
    } else {
        u16::from_str_radix(s,10)
    };
    res.map_err(|_| {
        log::error!("address {} could not be parsed as a 16 bit number",s);
        CommandError::OutOfRange
    })
}

fn from_command_line(cmd: &clap::ArgMatches, id: &str) -> bool {
    cmd.try_get_one::<String>(id).is_ok_and(|v| v.is_some())
        && cmd.value_source(id) == Some(ValueSource::CommandLine)
}

/// Settings from `--config`, then overridden by explicit options.
/// Only the options that the subcommand defines are consulted.
pub fn settings_from_args(cmd: &clap::ArgMatches) -> Result<Settings,DYNERR> {
    let mut ans = match from_command_line(cmd,"config") {
        true => settings::parse(cmd.get_one::<String>("config").expect(RCH))?,
        false => Settings::new()
    };
    if from_command_line(cmd,"machine") {
        ans.machine = Machine::from_str(cmd.get_one::<String>("machine").expect(RCH))?;
    }
    if from_command_line(cmd,"addr") {
        let addr = parse_addr(cmd.get_one::<String>("addr").expect(RCH))?;
        ans.program_start = addr;
        ans.load_address = Some(addr);
    }
    if from_command_line(cmd,"exec") {
        ans.exec_address = Some(parse_addr(cmd.get_one::<String>("exec").expect(RCH))?);
    }
    Ok(ans)
}

pub fn basic_from_args(cmd: &clap::ArgMatches) -> Result<Basic,DYNERR> {
    let settings = settings_from_args(cmd)?;
    log::debug!("{:?}",settings);
    Ok(Basic::from_settings(&settings)?)
}

fn refuse_console(name: &str) -> Result<(),CommandError> {
    if atty::is(atty::Stream::Stdin) {
        log::error!("line entry is not supported for `{}`, please pipe something in",name);
        return Err(CommandError::InvalidCommand);
    }
    Ok(())
}

/// Read the whole of stdin as text
pub fn read_stdin_string(name: &str) -> Result<String,DYNERR> {
    refuse_console(name)?;
    let mut program = String::new();
    match std::io::stdin().read_to_string(&mut program) {
        Ok(_) => {},
        Err(e) => {
            log::error!("the input to {} could not be interpreted as a string",name);
            return Err(Box::new(e));
        }
    }
    if program.trim().is_empty() {
        log::error!("{} did not receive any data from previous node",name);
        return Err(Box::new(CommandError::InvalidCommand));
    }
    Ok(program)
}

/// Read the whole of stdin as bytes
pub fn read_stdin_bytes(name: &str) -> Result<Vec<u8>,DYNERR> {
    refuse_console(name)?;
    let mut dat = Vec::new();
    std::io::stdin().read_to_end(&mut dat)?;
    if dat.is_empty() {
        log::error!("{} did not receive any data from previous node",name);
        return Err(Box::new(CommandError::InvalidCommand));
    }
    Ok(dat)
}

/// Show diagnostics on stderr with a summary count
pub fn eprint_diagnostics(diags: &[Diagnostic]) {
    for diag in diags {
        eprintln!("{} {}","warning:".bright_yellow(),diag);
    }
    if !diags.is_empty() {
        eprintln!("! {} {}",diags.len().to_string().bright_yellow(),"warnings".bright_yellow());
    }
}
