//! # Color BASIC tokenization and renumbering
//!
//! Covers the Microsoft Color BASIC family: Dragon 32, CoCo Color BASIC, and
//! CoCo Extended Color BASIC.  The dialects differ only in their token tables.
//!
//! The components are layered, each usable on its own:
//! * `token_table` maps token values to keyword text and back
//! * `tokenizer` converts text to tokens and back with maximal munch
//! * `segments` finds strings, comments, and data which are not tokenized
//! * `line` is a single program line, including the hidden colon quirk
//! * `listing` converts whole programs between dumps and lines
//! * `renumber` renumbers listing text
//!
//! `Basic` puts these together per machine.

mod token_maps;
#[cfg(test)]
mod listing_test;
pub mod token_table;
pub mod tokenizer;
pub mod segments;
pub mod line;
pub mod listing;
pub mod renumber;
pub mod settings;

use std::collections::{BTreeMap,BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use log::{debug,info,warn};
use crate::lang::{Diagnostic,Error};
use crate::fimg::dragondos::{DragonDosBinary,FileType};
use crate::DYNERR;
use line::Line;
use listing::Listing;
use renumber::Renumberer;
use segments::SegmentKind;
use token_table::TokenTable;
use tokenizer::Tokenizer;

/// Address of the first line record if nothing else is specified
pub const DEFAULT_PROGRAM_START: u16 = 0x1e01;

/// Machine variant, selects the token table
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Machine {
    Dragon32,
    CoCo,
    CoCoExtended
}

impl Machine {
    /// (value,text) pairs of this machine's token table
    pub fn token_pairs(&self) -> Vec<(u16,&'static str)> {
        match self {
            Self::Dragon32 => token_maps::DRAGON32.to_vec(),
            Self::CoCo => token_maps::COCO_COLOR.to_vec(),
            Self::CoCoExtended => {
                let mut ans = token_maps::COCO_COLOR.to_vec();
                ans.extend_from_slice(&token_maps::COCO_EXTENDED);
                ans
            }
        }
    }
}

impl FromStr for Machine {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "dragon32" => Ok(Self::Dragon32),
            "coco" => Ok(Self::CoCo),
            "cocoext" => Ok(Self::CoCoExtended),
            _ => Err(Error::UnknownMachine(s.to_string()))
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dragon32 => write!(f,"dragon32"),
            Self::CoCo => write!(f,"coco"),
            Self::CoCoExtended => write!(f,"cocoext")
        }
    }
}

/// All conversions for one machine.
/// Operations taking an `Option<u16>` address use the configured program start for `None`.
pub struct Basic {
    machine: Machine,
    program_start: u16,
    listing: Listing,
    renumberer: Renumberer,
    diagnostics: Vec<Diagnostic>
}

impl Basic {
    pub fn new(machine: Machine) -> Result<Self,Error> {
        Ok(Self::with_table(Arc::new(TokenTable::new(machine)?)))
    }
    /// Use an existing table, e.g. one shared with other threads
    pub fn with_table(table: Arc<TokenTable>) -> Self {
        Self {
            machine: table.machine(),
            program_start: DEFAULT_PROGRAM_START,
            listing: Listing::new(Tokenizer::with_table(table)),
            renumberer: Renumberer::new(),
            diagnostics: Vec::new()
        }
    }
    pub fn from_settings(settings: &settings::Settings) -> Result<Self,Error> {
        let mut ans = Self::new(settings.machine)?;
        ans.program_start = settings.program_start;
        Ok(ans)
    }
    pub fn machine(&self) -> Machine {
        self.machine
    }
    pub fn program_start(&self) -> u16 {
        self.program_start
    }
    pub fn set_program_start(&mut self, addr: u16) {
        self.program_start = addr;
    }
    pub fn tokenizer(&mut self) -> &mut Tokenizer {
        self.listing.tokenizer()
    }
    /// Everything reported since the last call, grouped by the component that found it
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        let mut ans = std::mem::take(&mut self.diagnostics);
        ans.append(&mut self.listing.tokenizer().take_diagnostics());
        ans.append(&mut self.renumberer.take_diagnostics());
        ans
    }
    fn report(&mut self, diag: Diagnostic) {
        warn!("{}",diag);
        self.diagnostics.push(diag);
    }
    /// Parse listing lines and order them by line number.  A repeated number replaces the earlier line.
    pub fn ascii_to_lines(&mut self, program: &str) -> Result<Vec<Line>,Error> {
        let mut sorted = BTreeMap::new();
        for line in self.listing.ascii_to_lines(program)? {
            let number = line.number;
            if sorted.insert(number,line).is_some() {
                self.report(Diagnostic::DuplicateLine(number));
            }
        }
        Ok(sorted.into_values().collect())
    }
    pub fn ascii_to_dump(&mut self, program: &str, program_start: Option<u16>) -> Result<Vec<u8>,Error> {
        let start = program_start.unwrap_or(self.program_start);
        let lines = self.ascii_to_lines(program)?;
        self.listing.lines_to_dump(&lines,start)
    }
    pub fn dump_to_ascii_lines(&mut self, dump: &[u8], program_start: Option<u16>) -> Result<Vec<String>,Error> {
        let start = program_start.unwrap_or(self.program_start);
        self.listing.dump_to_ascii(dump,start)
    }
    pub fn format_tokens(&mut self, tokens: &[u8]) -> Vec<String> {
        self.listing.tokenizer().format_tokens(tokens)
    }
    pub fn format_dump(&mut self, dump: &[u8], program_start: Option<u16>) -> Result<Vec<String>,Error> {
        let start = program_start.unwrap_or(self.program_start);
        self.listing.format_dump(dump,start)
    }
    pub fn renumber(&mut self, program: &str) -> String {
        self.renumberer.renumber(program)
    }
    pub fn destinations(&self, program: &str) -> BTreeSet<usize> {
        self.renumberer.get_destinations(program)
    }
    /// Normalize spacing of a listing, strings, comments, and data are left alone.
    /// Lines are ordered by number like `ascii_to_lines`.
    pub fn reformat(&mut self, program: &str) -> Result<String,Error> {
        let tokenizer = self.listing.tokenizer();
        let table = tokenizer.shared_table();
        let mut sorted = BTreeMap::new();
        let mut dups = Vec::new();
        for txt in program.lines().filter(|l| !l.trim().is_empty()) {
            let (number,code) = line::split_number(txt)?;
            let mut tokens = Vec::new();
            let mut ends_in_code = false;
            for seg in segments::classify(code,&table) {
                let mut part = Line::from_segments(number,std::slice::from_ref(&seg),tokenizer);
                let after_code = ends_in_code;
                ends_in_code = seg.kind == SegmentKind::Code;
                if ends_in_code {
                    part.reformat(&table);
                } else if after_code && part.code.first() == Some(&b' ') {
                    // comment or data brings its own space
                    while tokens.last() == Some(&b' ') {
                        tokens.pop();
                    }
                }
                tokens.append(&mut part.code);
            }
            // a keyword at the end of the line leaves a space behind
            while ends_in_code && tokens.last() == Some(&b' ') {
                tokens.pop();
            }
            if sorted.insert(number,Line::new(number,tokens)).is_some() {
                dups.push(number);
            }
        }
        let ans: Vec<String> = sorted.values().map(|l| l.get_content(tokenizer)).collect();
        for number in dups {
            self.report(Diagnostic::DuplicateLine(number));
        }
        Ok(ans.join("\n"))
    }
    /// Tokenize a listing and wrap it in a Dragon DOS container.
    /// The program is tokenized for the load address, which defaults to the program start.
    pub fn bas2bin(&mut self, program: &str, load_address: Option<u16>, exec_address: Option<u16>) -> Result<Vec<u8>,DYNERR> {
        let load = load_address.unwrap_or(self.program_start);
        let exec = exec_address.unwrap_or(self.program_start);
        let dump = self.ascii_to_dump(program,Some(load))?;
        let bin = DragonDosBinary::new(FileType::Basic,load,exec,dump)?;
        info!("Dragon DOS BASIC file, load ${:04x}, exec ${:04x}",load,exec);
        Ok(bin.to_bytes()?)
    }
    /// Unwrap a Dragon DOS container and detokenize the program it holds.
    /// The program is assumed to be loaded at the load address.
    pub fn bin2bas(&mut self, data: &[u8]) -> Result<String,DYNERR> {
        let bin = crate::fimg::load_binary(data)?;
        debug!("{:?}",bin.header);
        if bin.file_type() != Some(FileType::Basic) {
            self.report(Diagnostic::WrongFileType(bin.header.file_type));
        }
        let lines = self.dump_to_ascii_lines(&bin.data,Some(bin.header.load_address))?;
        Ok(lines.join("\n"))
    }
}
