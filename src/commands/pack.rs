//! ## Dragon DOS containers

use std::io::Write;
use super::{basic_from_args,eprint_diagnostics,read_stdin_bytes,read_stdin_string,settings_from_args};
use crate::fimg;
use crate::lang::basic::Basic;
use crate::STDRESULT;

pub fn pack(cmd: &clap::ArgMatches) -> STDRESULT {
    let program = read_stdin_string("pack")?;
    let settings = settings_from_args(cmd)?;
    let mut basic = Basic::from_settings(&settings)?;
    let load = settings.load_address();
    let object = basic.bas2bin(&program,Some(load),Some(settings.exec_address()))?;
    eprint_diagnostics(&basic.take_diagnostics());
    if atty::is(atty::Stream::Stdout) || cmd.get_flag("console") {
        crate::display_block(0,&object);
    } else {
        std::io::stdout().write_all(&object)?;
    }
    Ok(())
}

pub fn unpack(cmd: &clap::ArgMatches) -> STDRESULT {
    let dat = read_stdin_bytes("unpack")?;
    let mut basic = basic_from_args(cmd)?;
    let program = basic.bin2bas(&dat)?;
    eprint_diagnostics(&basic.take_diagnostics());
    println!("{}",program);
    Ok(())
}

pub fn meta(cmd: &clap::ArgMatches) -> STDRESULT {
    let dat = read_stdin_bytes("meta")?;
    let bin = fimg::load_binary(&dat)?;
    let indent = cmd.get_one::<u16>("indent").copied();
    println!("{}",bin.to_json(indent));
    Ok(())
}
