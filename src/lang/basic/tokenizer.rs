//! Module containing the Color BASIC token codec
//!
//! Conversion here is purely lexical: every keyword or operator found by maximal munch
//! is replaced by its token.  Knowing that keywords inside strings, comments and
//! `DATA` must not be tokenized is the job of the segment classifier and the line model.

use std::sync::Arc;
use log::{trace,warn};
use super::token_table::{Token,TokenIter,TokenTable};
use super::Machine;
use crate::lang::{Diagnostic,Error};

/// Handles tokenization and detokenization of Color BASIC text.
/// The table is shared, the diagnostics are not, so each thread should have its own `Tokenizer`.
pub struct Tokenizer {
    table: Arc<TokenTable>,
    diagnostics: Vec<Diagnostic>
}

impl Tokenizer {
    pub fn new(machine: Machine) -> Result<Self,Error> {
        Ok(Self::with_table(Arc::new(TokenTable::new(machine)?)))
    }
    pub fn with_table(table: Arc<TokenTable>) -> Self {
        Self {
            table,
            diagnostics: Vec::new()
        }
    }
    pub fn table(&self) -> &TokenTable {
        &self.table
    }
    /// get another handle to the table, e.g. to build a tokenizer for another thread
    pub fn shared_table(&self) -> Arc<TokenTable> {
        Arc::clone(&self.table)
    }
    /// diagnostics gathered since the last call
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
    fn report(&mut self, diag: Diagnostic) {
        warn!("{}",diag);
        self.diagnostics.push(diag);
    }
    /// Store a character as a byte.  Characters beyond U+00FF have no byte and become `?`.
    fn char_to_byte(&mut self, c: char) -> u8 {
        match u8::try_from(c) {
            Ok(b) => b,
            Err(_) => {
                self.report(Diagnostic::UnmappedChar(c));
                b'?'
            }
        }
    }
    /// Store text as bytes without tokenizing anything, used for strings, comments, and data.
    pub fn text_to_bytes(&mut self, text: &str) -> Vec<u8> {
        text.chars().map(|c| self.char_to_byte(c)).collect()
    }
    /// Tokenize `text` by maximal munch.  Matching is case sensitive, lower case keywords
    /// are copied as plain characters.
    pub fn text_to_tokens(&mut self, text: &str) -> Vec<u8> {
        let table = Arc::clone(&self.table);
        let mut ans = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            if let Some(kw) = table.longest_match(rest) {
                if let Some(tok) = table.token_for_text(kw) {
                    trace!("\t{:?} -> {:x}",kw,tok.value());
                    tok.push_bytes(&mut ans);
                    rest = &rest[kw.len()..];
                    continue;
                }
            }
            ans.push(self.char_to_byte(c));
            rest = &rest[c.len_utf8()..];
        }
        ans
    }
    /// Text for a single token, unknown function tokens give empty text
    pub fn token_to_text(&mut self, tok: Token) -> String {
        match self.table.text_for_token(tok) {
            Some(txt) => txt.into_owned(),
            None => {
                self.report(Diagnostic::UnknownToken(tok.value()));
                String::new()
            }
        }
    }
    /// Detokenize stored bytes, the end of line terminator should not be included.
    pub fn tokens_to_text(&mut self, tokens: &[u8]) -> String {
        let mut ans = String::new();
        for tok in TokenIter::new(tokens) {
            ans += &self.token_to_text(tok);
        }
        ans
    }
    /// One line per token, showing the value and its text, useful for debugging.
    pub fn format_tokens(&mut self, tokens: &[u8]) -> Vec<String> {
        let mut ans = Vec::new();
        for tok in TokenIter::new(tokens) {
            let txt = self.token_to_text(tok);
            ans.push(match tok {
                Token::Byte(b) => format!("\t  ${:02x} -> {}",b,quoted(&txt)),
                Token::Word(w) => format!("\t${:04x} -> {}",w,quoted(&txt))
            });
        }
        ans
    }
}

/// Quote text for debug output: single quotes unless the text contains a single
/// quote and no double quote, backslash and control characters escaped.
pub fn quoted(txt: &str) -> String {
    let q = match txt.contains('\'') && !txt.contains('"') {
        true => '"',
        false => '\''
    };
    let mut ans = String::from(q);
    for c in txt.chars() {
        match c {
            '\\' => ans += "\\\\",
            '\n' => ans += "\\n",
            '\r' => ans += "\\r",
            '\t' => ans += "\\t",
            c if c == q => {
                ans.push('\\');
                ans.push(c);
            },
            c if c.is_control() => ans += &format!("\\x{:02x}",c as u32),
            c => ans.push(c)
        }
    }
    ans.push(q);
    ans
}
