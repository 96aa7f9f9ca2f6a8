//! # Language Module
//!
//! Errors and diagnostics shared by the language services.
//! Dialect specific operations such as tokenization are in the submodules,
//! at present only `basic`, which covers the Microsoft Color BASIC family
//! (Dragon 32, CoCo, CoCo Extended).

pub mod basic;

use std::fmt;
use thiserror::Error;

/// Fatal problems, these abort the conversion that found them.
#[derive(Error,Debug)]
pub enum Error {
    #[error("no space between line number and code in line: {0:?}")]
    MissingSeparator(String),
    #[error("invalid line number: {0:?}")]
    LineNumber(String),
    #[error("line code does not end with $00: {0}")]
    MissingTerminator(String),
    #[error("next address ${next:04X} is not beyond program start ${start:04X}")]
    AddressOrder { next: u16, start: u16 },
    #[error("program dump is truncated at offset {offset}")]
    Truncated { offset: usize },
    #[error("program does not fit in the address space")]
    ProgramTooLarge,
    #[error("token table maps the text {0:?} more than once")]
    DuplicateToken(String),
    #[error("unknown machine {0:?}")]
    UnknownMachine(String)
}

/// Recoverable problems.  The best effort result is still produced,
/// these are collected by the component that found them so the caller can
/// show them, and they are also sent to the log.
#[derive(Debug,Clone,PartialEq)]
pub enum Diagnostic {
    /// two byte token with no entry in the table, decoded as empty text
    UnknownToken(u16),
    /// character that cannot be stored in a byte, replaced with `?`
    UnmappedChar(char),
    /// jump target with no line definition, left as written
    DanglingReference { line: String, target: String },
    /// listing line that does not start with a number
    MissingLineNumber(String),
    /// a later line with the same number replaced an earlier one
    DuplicateLine(u16),
    /// binary container does not hold a tokenized BASIC program
    WrongFileType(u8)
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken(val) => write!(f,"token ${:04x} is not in the token table",val),
            Self::UnmappedChar(c) => write!(f,"character {:?} cannot be stored, replaced with '?'",c),
            Self::DanglingReference { line, target } => write!(f,"in line {:?}: line no. {:?} doesn't exist",line,target),
            Self::MissingLineNumber(line) => write!(f,"line {:?} has no line number",line),
            Self::DuplicateLine(num) => write!(f,"line {} is defined more than once, last one wins",num),
            Self::WrongFileType(typ) => write!(f,"file type ${:02X} is not $01 (tokenized BASIC)",typ)
        }
    }
}

/// Format bytes like `$3a $83` for messages
pub fn hex_list(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("${:02x}",b)).collect::<Vec<String>>().join(" ")
}

/// If `key` exists in the JSON object `obj` and is an unsigned integer that fits, update `curr`.
pub fn update_json_u16(obj: &serde_json::Value, key: &str, curr: &mut u16) {
    if let Some(x) = obj.get(key) {
        if let Some(n) = x.as_u64() {
            if let Ok(val) = u16::try_from(n) {
                *curr = val;
                return;
            }
        }
        log::warn!("setting {} ignored, expected a 16 bit unsigned integer",key);
    }
}

/// If `key` exists in the JSON object `obj` and is a string, update `curr`.
pub fn update_json_string(obj: &serde_json::Value, key: &str, curr: &mut String) {
    if let Some(x) = obj.get(key) {
        match x.as_str() {
            Some(s) => *curr = s.to_string(),
            None => log::warn!("setting {} ignored, expected a string",key)
        }
    }
}
