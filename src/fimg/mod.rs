//! # File Images
//!
//! Containers that wrap a program so it can be loaded by the target machine.
//! At present the only supported container is the Dragon DOS binary file.
//! CoCo Disk Extended Color BASIC files are recognized but not supported.

pub mod dragondos;

use log::{debug,info};
use thiserror::Error;

#[derive(Error,Debug)]
pub enum Error {
    #[error("container is empty")]
    Empty,
    #[error("bad marker at offset {offset}: expected ${expected:02X}, found ${found:02X}")]
    BadMarker { offset: usize, expected: u8, found: u8 },
    #[error("{0} format is not supported")]
    UnsupportedFormat(String),
    #[error("unknown container format, first byte ${0:02X}")]
    UnknownFormat(u8),
    #[error("header declares {declared} bytes but {actual} are available")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("payload of {0} bytes does not fit in the container")]
    TooLarge(usize),
    #[error("header could not be processed: {0}")]
    Header(#[from] binrw::Error)
}

/// Identify the container from its first byte and unpack it.
pub fn load_binary(data: &[u8]) -> Result<dragondos::DragonDosBinary,Error> {
    match data.first() {
        None => Err(Error::Empty),
        Some(&dragondos::HEAD) => {
            info!("identified Dragon DOS binary");
            dragondos::DragonDosBinary::from_bytes(data)
        },
        Some(0x00) => {
            debug!("first byte $00 suggests a CoCo DECB file");
            Err(Error::UnsupportedFormat("CoCo DECB (Disk Extended Color BASIC)".to_string()))
        },
        Some(b) => Err(Error::UnknownFormat(*b))
    }
}
