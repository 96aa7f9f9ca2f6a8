//! ## Language Transformations

use std::io::Write;
use colored::Colorize;
use super::{basic_from_args,eprint_diagnostics,read_stdin_bytes,read_stdin_string};
use crate::lang::basic::renumber::Renumberer;
use crate::STDRESULT;

pub fn tokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let program = read_stdin_string("tokenize")?;
    let mut basic = basic_from_args(cmd)?;
    let object = basic.ascii_to_dump(&program,None)?;
    eprint_diagnostics(&basic.take_diagnostics());
    if atty::is(atty::Stream::Stdout) || cmd.get_flag("console") {
        crate::display_block(basic.program_start(),&object);
    } else {
        std::io::stdout().write_all(&object)?;
    }
    Ok(())
}

pub fn detokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let dump = read_stdin_bytes("detokenize")?;
    let mut basic = basic_from_args(cmd)?;
    let lines = basic.dump_to_ascii_lines(&dump,None)?;
    eprint_diagnostics(&basic.take_diagnostics());
    for line in lines {
        println!("{}",line);
    }
    Ok(())
}

pub fn inspect(cmd: &clap::ArgMatches) -> STDRESULT {
    let dump = read_stdin_bytes("inspect")?;
    let mut basic = basic_from_args(cmd)?;
    let lines = basic.format_dump(&dump,None)?;
    eprint_diagnostics(&basic.take_diagnostics());
    for line in lines {
        println!("{}",line);
    }
    Ok(())
}

pub fn renumber(_cmd: &clap::ArgMatches) -> STDRESULT {
    let program = read_stdin_string("renumber")?;
    let mut renumberer = Renumberer::new();
    let new_prog = renumberer.renumber(&program);
    let diags = renumberer.take_diagnostics();
    eprint_diagnostics(&diags);
    if diags.is_empty() {
        eprintln!("\u{2713} {}","all references resolved".green());
    }
    println!("{}",new_prog);
    Ok(())
}

pub fn destinations(_cmd: &clap::ArgMatches) -> STDRESULT {
    let program = read_stdin_string("destinations")?;
    let renumberer = Renumberer::new();
    for num in renumberer.get_destinations(&program) {
        println!("{}",num);
    }
    Ok(())
}

pub fn reformat(cmd: &clap::ArgMatches) -> STDRESULT {
    let program = read_stdin_string("reformat")?;
    let mut basic = basic_from_args(cmd)?;
    let new_prog = basic.reformat(&program)?;
    eprint_diagnostics(&basic.take_diagnostics());
    println!("{}",new_prog);
    Ok(())
}
