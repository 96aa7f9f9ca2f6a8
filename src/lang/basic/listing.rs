//! Listing codec
//!
//! A program in memory is a chain of records `[next:u16][line:u16][code][$00]`,
//! all big endian.  `next` is the absolute address of the following record, and
//! a `next` of zero ends the program.

use log::{debug,info,trace};
use super::line::Line;
use super::tokenizer::Tokenizer;
use crate::lang::{hex_list,Error};

/// One record of a program dump
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Record<'a> {
    pub next: u16,
    pub number: u16,
    /// stored code including the terminator
    pub tokens: &'a [u8]
}

/// Walks the records of a dump.  Iteration stops at the end of program marker
/// or when the dump is exhausted, bytes after the marker are never read.
pub struct Records<'a> {
    dump: &'a [u8],
    offset: usize,
    start: u16,
    done: bool,
    found_end: bool
}

impl<'a> Records<'a> {
    pub fn new(dump: &'a [u8], program_start: u16) -> Self {
        Self { dump, offset: 0, start: program_start, done: false, found_end: false }
    }
    /// true once the `$0000` end of program marker has been read
    pub fn found_end(&self) -> bool {
        self.found_end
    }
    /// offset of the first unread byte
    pub fn offset(&self) -> usize {
        self.offset
    }
    fn fail(&mut self, e: Error) -> Option<Result<Record<'a>,Error>> {
        self.done = true;
        Some(Err(e))
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Record<'a>,Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let pos = self.offset;
        if pos + 2 > self.dump.len() {
            debug!("dump exhausted at offset {} without end of program marker",pos);
            self.done = true;
            return None;
        }
        let next = u16::from_be_bytes([self.dump[pos],self.dump[pos+1]]);
        if next == 0 {
            self.offset += 2;
            self.done = true;
            self.found_end = true;
            return None;
        }
        if next <= self.start {
            return self.fail(Error::AddressOrder { next, start: self.start });
        }
        if pos + 4 > self.dump.len() {
            return self.fail(Error::Truncated { offset: self.dump.len() });
        }
        let number = u16::from_be_bytes([self.dump[pos+2],self.dump[pos+3]]);
        let end = pos + (next - self.start) as usize;
        if end > self.dump.len() {
            return self.fail(Error::Truncated { offset: self.dump.len() });
        }
        if end < pos + 5 {
            // no room for even the terminator
            return self.fail(Error::MissingTerminator(hex_list(&self.dump[pos..end])));
        }
        self.offset = end;
        self.start = next;
        Some(Ok(Record { next, number, tokens: &self.dump[pos+4..end] }))
    }
}

/// Converts between program dumps, lines, and listings
pub struct Listing {
    tokenizer: Tokenizer
}

impl Listing {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
    pub fn tokenizer(&mut self) -> &mut Tokenizer {
        &mut self.tokenizer
    }
    /// Parse a dump loaded at `program_start` into lines
    pub fn dump_to_lines(&mut self, dump: &[u8], program_start: u16) -> Result<Vec<Line>,Error> {
        let mut ans = Vec::new();
        for rec in Records::new(dump,program_start) {
            let rec = rec?;
            trace!("${:04x} next, line {}: {}",rec.next,rec.number,hex_list(rec.tokens));
            ans.push(Line::from_tokens(rec.number,rec.tokens)?);
        }
        debug!("{} lines in dump",ans.len());
        Ok(ans)
    }
    /// Serialize lines in the given order.  The end of program marker follows the last line,
    /// an empty program is the marker alone.
    pub fn lines_to_dump(&self, lines: &[Line], program_start: u16) -> Result<Vec<u8>,Error> {
        let mut ans = Vec::new();
        let mut addr = program_start as usize;
        for line in lines {
            let mut rec = line.get_tokens();
            rec.push(0);
            addr += rec.len() + 2;
            let next = u16::try_from(addr).map_err(|_| Error::ProgramTooLarge)?;
            ans.extend_from_slice(&u16::to_be_bytes(next));
            ans.append(&mut rec);
        }
        ans.extend_from_slice(&[0,0]);
        info!("dump of {} lines spans ${:04x}..${:04x}",lines.len(),program_start,addr);
        Ok(ans)
    }
    /// Parse listing lines in the order given, blank lines are skipped.
    pub fn ascii_to_lines(&mut self, txt: &str) -> Result<Vec<Line>,Error> {
        let mut ans = Vec::new();
        for line in txt.lines() {
            if line.trim().is_empty() {
                continue;
            }
            ans.push(Line::from_ascii(line,&mut self.tokenizer)?);
        }
        Ok(ans)
    }
    pub fn ascii_to_dump(&mut self, txt: &str, program_start: u16) -> Result<Vec<u8>,Error> {
        let lines = self.ascii_to_lines(txt)?;
        self.lines_to_dump(&lines,program_start)
    }
    pub fn dump_to_ascii(&mut self, dump: &[u8], program_start: u16) -> Result<Vec<String>,Error> {
        let lines = self.dump_to_lines(dump,program_start)?;
        Ok(lines.iter().map(|l| l.get_content(&mut self.tokenizer)).collect())
    }
    /// Annotated breakdown of a dump, one entry per output line.
    /// Unlike `dump_to_lines` a missing end of program marker is an error.
    pub fn format_dump(&mut self, dump: &[u8], program_start: u16) -> Result<Vec<String>,Error> {
        let mut ans = vec![format!("program start address: ${:04x}",program_start)];
        let mut start = program_start;
        let mut records = Records::new(dump,program_start);
        for rec in records.by_ref() {
            let rec = rec?;
            ans.push(format!("${:04x} -> next address (length: {})",rec.next,rec.next - start));
            ans.push(format!("${:04x} -> {} (line number)",rec.number,rec.number));
            ans.push("tokens:".to_string());
            ans.append(&mut self.tokenizer.format_tokens(rec.tokens));
            start = rec.next;
        }
        if !records.found_end() {
            return Err(Error::Truncated { offset: records.offset() });
        }
        ans.push("$0000 -> end address".to_string());
        Ok(ans)
    }
}
