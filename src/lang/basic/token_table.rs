//! Bidirectional map between token values and keyword/operator text.
//!
//! A table is built once per machine and never mutated afterwards, so it can be
//! shared between threads (e.g. in an `Arc`) without synchronization.

use std::borrow::Cow;
use std::collections::HashMap;
use log::trace;
use super::Machine;
use crate::lang::Error;

/// Prefix byte of the two byte function tokens
pub const PREFIX: u8 = 0xff;

/// A token as it is stored in program memory.
/// Function tokens are stored as `PREFIX` followed by the low byte.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Token {
    Byte(u8),
    Word(u16)
}

impl Token {
    pub fn from_value(val: u16) -> Self {
        match u8::try_from(val) {
            Ok(b) => Self::Byte(b),
            Err(_) => Self::Word(val)
        }
    }
    pub fn value(&self) -> u16 {
        match self {
            Self::Byte(b) => *b as u16,
            Self::Word(w) => *w
        }
    }
    /// append the stored form to `dst`
    pub fn push_bytes(&self, dst: &mut Vec<u8>) {
        match self {
            Self::Byte(b) => dst.push(*b),
            Self::Word(w) => dst.extend_from_slice(&u16::to_be_bytes(*w))
        }
    }
}

/// Iterates over stored bytes yielding tokens, `PREFIX` combines with the byte after it.
/// A `PREFIX` in the last position has nothing to combine with and is yielded as a byte.
pub struct TokenIter<'a> {
    bytes: &'a [u8],
    idx: usize
}

impl<'a> TokenIter<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, idx: 0 }
    }
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = Token;
    fn next(&mut self) -> Option<Token> {
        let b = *self.bytes.get(self.idx)?;
        if b == PREFIX && self.idx + 1 < self.bytes.len() {
            let lo = self.bytes[self.idx + 1];
            self.idx += 2;
            return Some(Token::Word(u16::from_be_bytes([PREFIX,lo])));
        }
        self.idx += 1;
        Some(Token::Byte(b))
    }
}

/// Token table of one machine
pub struct TokenTable {
    machine: Machine,
    detok_map: HashMap<u16,&'static str>,
    tok_map: HashMap<&'static str,u16>,
    /// keywords keyed by their first byte, longest first
    candidates: HashMap<u8,Vec<&'static str>>
}

impl TokenTable {
    /// Build the table for `machine`
    pub fn new(machine: Machine) -> Result<Self,Error> {
        Self::from_pairs(machine,&machine.token_pairs())
    }
    /// Build a table from (value,text) pairs.  Every text must be unique,
    /// otherwise the reverse map would be ambiguous.
    pub fn from_pairs(machine: Machine, pairs: &[(u16,&'static str)]) -> Result<Self,Error> {
        let mut detok_map = HashMap::new();
        let mut tok_map = HashMap::new();
        let mut candidates: HashMap<u8,Vec<&'static str>> = HashMap::new();
        for (val,txt) in pairs {
            if txt.is_empty() || tok_map.insert(*txt,*val).is_some() {
                return Err(Error::DuplicateToken(txt.to_string()));
            }
            if detok_map.insert(*val,*txt).is_some() {
                return Err(Error::DuplicateToken(format!("${:04x}",val)));
            }
            candidates.entry(txt.as_bytes()[0]).or_default().push(*txt);
        }
        for list in candidates.values_mut() {
            list.sort_by(|a,b| b.len().cmp(&a.len()).then(a.cmp(b)));
        }
        trace!("built {} token table with {} entries",machine,pairs.len());
        Ok(Self { machine, detok_map, tok_map, candidates })
    }
    pub fn machine(&self) -> Machine {
        self.machine
    }
    /// Token for keyword or operator text, `None` if the text is not in the table.
    pub fn token_for_text(&self, text: &str) -> Option<Token> {
        self.tok_map.get(text).map(|v| Token::from_value(*v))
    }
    /// Token for a single character, falling back to the character's own byte.
    pub fn token_for_char(&self, c: char) -> Token {
        let mut buf = [0;4];
        match self.token_for_text(c.encode_utf8(&mut buf)) {
            Some(tok) => tok,
            None => Token::Byte(c as u8)
        }
    }
    /// Text for a token.  An unmapped byte stands for itself;
    /// an unmapped word has no text and gives `None`.
    pub fn text_for_token(&self, tok: Token) -> Option<Cow<'static,str>> {
        match (self.detok_map.get(&tok.value()),tok) {
            (Some(txt),_) => Some(Cow::Borrowed(*txt)),
            (None,Token::Byte(b)) => Some(Cow::Owned(char::from(b).to_string())),
            (None,Token::Word(_)) => None
        }
    }
    /// true if the token has keyword or operator text
    pub fn is_keyword(&self, tok: Token) -> bool {
        self.detok_map.contains_key(&tok.value())
    }
    /// Longest keyword or operator that `text` starts with.
    pub fn longest_match(&self, text: &str) -> Option<&'static str> {
        let first = text.as_bytes().first()?;
        self.candidates.get(first)?.iter().find(|kw| text.starts_with(**kw)).copied()
    }
}
