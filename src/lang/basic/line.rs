//! Line model
//!
//! The interpreter stores a colon in front of every `'` and `ELSE` token, and the
//! listing never shows it.  `Line::code` always holds the stored form, so a dump
//! survives a round trip byte for byte, and the colon is removed only for display.

use log::{debug,trace};
use super::segments::{self,Segment,SegmentKind};
use super::token_table::{Token,TokenIter,TokenTable};
use super::tokenizer::Tokenizer;
use crate::lang::{hex_list,Error};

/// texts of the tokens that are stored with a hidden colon
const HIDDEN_COLON_BEFORE: [&str;2] = ["'","ELSE"];
/// operators that need no space around them when reformatting
const DONT_SPLIT: &str = ":()+-*/^<=>";

fn hidden_colon_targets(table: &TokenTable) -> Vec<Token> {
    HIDDEN_COLON_BEFORE.iter().filter_map(|t| table.token_for_text(t)).collect()
}

/// Insert the hidden colon before each `'` and `ELSE` token
pub fn escape_colons(code: &[u8], table: &TokenTable) -> Vec<u8> {
    let colon = table.token_for_char(':');
    let targets = hidden_colon_targets(table);
    let mut ans = Vec::new();
    for tok in TokenIter::new(code) {
        if targets.contains(&tok) {
            colon.push_bytes(&mut ans);
        }
        tok.push_bytes(&mut ans);
    }
    ans
}

/// Remove the hidden colon before each `'` and `ELSE` token
pub fn unescape_colons(code: &[u8], table: &TokenTable) -> Vec<u8> {
    let colon = table.token_for_char(':');
    let targets = hidden_colon_targets(table);
    let toks: Vec<Token> = TokenIter::new(code).collect();
    let mut ans = Vec::new();
    for (i,tok) in toks.iter().enumerate() {
        if *tok == colon && i + 1 < toks.len() && targets.contains(&toks[i+1]) {
            continue;
        }
        tok.push_bytes(&mut ans);
    }
    ans
}

/// Replace every occurrence of `old` in `toks` with `new`, scanning left to right
fn replace_sequence(toks: &[Token], old: &[Token], new: &[Token]) -> Vec<Token> {
    let mut ans = Vec::new();
    let mut i = 0;
    while i < toks.len() {
        if toks[i..].starts_with(old) {
            ans.extend_from_slice(new);
            i += old.len();
        } else {
            ans.push(toks[i]);
            i += 1;
        }
    }
    ans
}

/// Normalize spacing of tokenized code: one space around keywords, none around
/// punctuation operators, `GO TO` and `GO SUB` joined.
/// Only pass code segments, strings and comments would be mangled.
pub fn reformat_tokens(code: &[u8], table: &TokenTable) -> Vec<u8> {
    let space = Token::Byte(b' ');
    let dont_split: Vec<Token> = DONT_SPLIT.chars().map(|c| table.token_for_char(c)).collect();
    let to_split = |tok: &Token| table.is_keyword(*tok) && !dont_split.contains(tok);
    let toks: Vec<Token> = TokenIter::new(code).collect();
    let mut temp: Vec<Token> = Vec::new();
    let mut was_token = false;
    for (i,tok) in toks.iter().enumerate() {
        if to_split(tok) {
            if temp.last().is_some_and(|t| *t != space) {
                temp.push(space);
            }
            temp.push(*tok);
            match toks.get(i+1) {
                Some(next) if dont_split.contains(next) => {},
                _ => temp.push(space)
            }
            was_token = true;
        } else if *tok == space && was_token {
            // space already added after the keyword
            was_token = false;
        } else {
            was_token = false;
            temp.push(*tok);
        }
    }
    // clean up
    let tok = |s: &str| table.token_for_text(s);
    let colon = table.token_for_char(':');
    let comma = table.token_for_char(',');
    let lparen = table.token_for_char('(');
    if let (Some(go),Some(to),Some(sub)) = (tok("GO"),tok("TO"),tok("SUB")) {
        temp = replace_sequence(&temp,&[go,space,to],&[go,to]);
        temp = replace_sequence(&temp,&[go,space,sub],&[go,sub]);
    }
    temp = replace_sequence(&temp,&[colon,space],&[colon]);
    temp = replace_sequence(&temp,&[lparen,space],&[lparen]);
    temp = replace_sequence(&temp,&[comma,space],&[comma]);
    temp = replace_sequence(&temp,&[space,comma],&[comma]);
    let mut ans = Vec::new();
    for t in temp {
        t.push_bytes(&mut ans);
    }
    ans
}

/// Split `10 PRINT` into number and code at the first space
pub fn split_number(line: &str) -> Result<(u16,&str),Error> {
    let trimmed = line.trim();
    let (num,code) = match trimmed.split_once(' ') {
        Some(parts) => parts,
        None => return Err(Error::MissingSeparator(trimmed.to_string()))
    };
    if !num.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::LineNumber(num.to_string()));
    }
    match num.parse::<u16>() {
        Ok(n) => Ok((n,code)),
        Err(_) => Err(Error::LineNumber(num.to_string()))
    }
}

/// One program line in stored form, without the link address and without the terminator
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Line {
    pub number: u16,
    pub code: Vec<u8>
}

impl Line {
    pub fn new(number: u16, code: Vec<u8>) -> Self {
        Self { number, code }
    }
    /// Line from the token bytes of a dump record, which must end with the terminator.
    pub fn from_tokens(number: u16, tokens: &[u8]) -> Result<Self,Error> {
        match tokens.split_last() {
            Some((&0,code)) => {
                trace!("line {}: {}",number,hex_list(code));
                Ok(Self::new(number,code.to_vec()))
            },
            _ => Err(Error::MissingTerminator(hex_list(tokens)))
        }
    }
    /// Line from classified code, code segments are tokenized, other segments stored as typed
    pub fn from_segments(number: u16, segs: &[Segment], tokenizer: &mut Tokenizer) -> Self {
        let table = tokenizer.shared_table();
        let mut code = Vec::new();
        for seg in segs {
            match seg.kind {
                SegmentKind::Code => {
                    let raw = tokenizer.text_to_tokens(&seg.text);
                    code.append(&mut escape_colons(&raw,&table));
                },
                _ => code.append(&mut tokenizer.text_to_bytes(&seg.text))
            }
        }
        Self::new(number,code)
    }
    /// Line from a listing line such as `10 PRINT "HELLO"`
    pub fn from_ascii(line: &str, tokenizer: &mut Tokenizer) -> Result<Self,Error> {
        let (number,code) = split_number(line)?;
        let segs = segments::classify(code,tokenizer.table());
        debug!("line {} segments {:?}",number,segs);
        Ok(Self::from_segments(number,&segs,tokenizer))
    }
    /// big endian line number followed by the stored code
    pub fn get_tokens(&self) -> Vec<u8> {
        let mut ans = u16::to_be_bytes(self.number).to_vec();
        ans.extend_from_slice(&self.code);
        ans
    }
    /// code as the user sees it, hidden colons removed
    pub fn display_code(&self, table: &TokenTable) -> Vec<u8> {
        unescape_colons(&self.code,table)
    }
    /// listing line, e.g. `10 PRINT "HELLO"`
    pub fn get_content(&self, tokenizer: &mut Tokenizer) -> String {
        let code = self.display_code(tokenizer.table());
        format!("{} {}",self.number,tokenizer.tokens_to_text(&code))
    }
    /// listing line followed by the token by token breakdown of the stored code
    pub fn format(&self, tokenizer: &mut Tokenizer) -> Vec<String> {
        let mut ans = vec![self.get_content(tokenizer)];
        ans.append(&mut tokenizer.format_tokens(&self.code));
        ans
    }
    /// Normalize spacing in place.  The whole line is treated as code,
    /// use `Basic::reformat` to leave strings and comments alone.
    pub fn reformat(&mut self, table: &TokenTable) {
        let shown = unescape_colons(&self.code,table);
        self.code = escape_colons(&reformat_tokens(&shown,table),table);
    }
}
