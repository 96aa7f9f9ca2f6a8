//! # `dragonkit` main library
//!
//! This library converts BASIC programs for the Dragon 32 and the Tandy Color Computer
//! between three forms:
//! * the ASCII listing a person reads and edits
//! * the tokenized lines the interpreter keeps in memory
//! * the memory dump, optionally wrapped in a Dragon DOS binary container
//!
//! ## Language Files
//!
//! Language services are in `lang`.  The Color BASIC family is handled by `lang::basic`,
//! which provides tokenization, detokenization, renumbering, and reformatting.
//! The dialects differ only in their token tables, select one with `lang::basic::Machine`.
//!
//! ```rust
//! use dragonkit::lang::basic::{Basic,Machine};
//! let mut basic = Basic::new(Machine::Dragon32).expect("table");
//! let dump = basic.ascii_to_dump("10 CLS",None).expect("tokenize");
//! assert_eq!(dump,vec![0x1e,0x07,0x00,0x0a,0xa0,0x00,0x00,0x00]);
//! ```
//!
//! ## File Images
//!
//! Containers are in `fimg`.  At present this is the Dragon DOS binary file.
//!
//! ## Concurrency
//!
//! A token table is never changed after it is built, so one `Arc<TokenTable>` can be
//! shared by any number of threads, each with its own `Tokenizer` or `Basic`.

pub mod lang;
pub mod fimg;
pub mod commands;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Rows of a hex dump, 16 bytes per row, labeled starting from `start_addr`.
/// Each row shows the address, the bytes, and the printable ASCII.
pub fn hex_lines(start_addr: u16,block: &[u8]) -> Vec<String> {
    let mut ans = Vec::new();
    for (row,slice) in block.chunks(16).enumerate() {
        let row_label = start_addr as usize + row*16;
        let txt: String = slice.iter().map(|c| match *c {
            x if x<32 => '.',
            x if x<127 => x as char,
            _ => '.'
        }).collect();
        let mut line = format!("{:04X} : ",row_label);
        for byte in slice {
            line += &format!("{:02X} ",byte);
        }
        for _blank in slice.len()..16 {
            line += "   ";
        }
        line += &format!("|+| {}",txt);
        ans.push(line);
    }
    ans
}

/// Display binary to stdout in columns of hex and ascii
pub fn display_block(start_addr: u16,block: &[u8]) {
    for line in hex_lines(start_addr,block) {
        println!("{}",line);
    }
}
