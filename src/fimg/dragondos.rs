//! ### Dragon DOS binary files
//!
//! A 9 byte header followed by the payload:
//! `$55`, file type, load address, length, exec address, `$AA`, all big endian.
//! The length field is authoritative, anything after the payload is ignored.

use std::io::Cursor;
use binrw::{BinRead,BinWrite};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use log::{debug,warn};
use super::Error;

pub const HEAD: u8 = 0x55;
pub const TAIL: u8 = 0xaa;
pub const HEADER_LEN: usize = 9;

#[derive(FromPrimitive,Debug,Clone,Copy,PartialEq,Eq)]
pub enum FileType {
    Basic = 0x01,
    Binary = 0x02
}

#[derive(BinRead, BinWrite, Debug, Clone, PartialEq, Eq)]
#[brw(big, magic = 0x55u8)]
pub struct Header {
    pub file_type: u8,
    pub load_address: u16,
    pub length: u16,
    pub exec_address: u16,
    pub tail: u8
}

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct DragonDosBinary {
    pub header: Header,
    pub data: Vec<u8>
}

impl DragonDosBinary {
    pub fn new(file_type: FileType, load_address: u16, exec_address: u16, data: Vec<u8>) -> Result<Self,Error> {
        let length = u16::try_from(data.len()).map_err(|_| Error::TooLarge(data.len()))?;
        Ok(Self {
            header: Header {
                file_type: file_type as u8,
                load_address,
                length,
                exec_address,
                tail: TAIL
            },
            data
        })
    }
    /// Unpack a container, the payload is exactly the declared length.
    pub fn from_bytes(data: &[u8]) -> Result<Self,Error> {
        if data.len() < HEADER_LEN {
            return Err(Error::LengthMismatch { declared: HEADER_LEN, actual: data.len() });
        }
        let header = match Header::read(&mut Cursor::new(&data[0..HEADER_LEN])) {
            Ok(h) => h,
            Err(binrw::Error::BadMagic { .. }) => return Err(Error::BadMarker { offset: 0, expected: HEAD, found: data[0] }),
            Err(e) => return Err(Error::Header(e))
        };
        if header.tail != TAIL {
            return Err(Error::BadMarker { offset: HEADER_LEN-1, expected: TAIL, found: header.tail });
        }
        debug!("{:?}",header);
        let end = HEADER_LEN + header.length as usize;
        if end > data.len() {
            return Err(Error::LengthMismatch { declared: header.length as usize, actual: data.len() - HEADER_LEN });
        }
        if end < data.len() {
            warn!("ignoring {} bytes after the declared length",data.len() - end);
        }
        Ok(Self {
            header,
            data: data[HEADER_LEN..end].to_vec()
        })
    }
    pub fn to_bytes(&self) -> Result<Vec<u8>,Error> {
        let mut curs = Cursor::new(Vec::new());
        self.header.write(&mut curs)?;
        let mut ans = curs.into_inner();
        ans.extend_from_slice(&self.data);
        Ok(ans)
    }
    pub fn file_type(&self) -> Option<FileType> {
        FileType::from_u8(self.header.file_type)
    }
    /// Header fields and payload in a JSON string
    pub fn to_json(&self, indent: Option<u16>) -> String {
        let type_name = match self.file_type() {
            Some(FileType::Basic) => "BASIC",
            Some(FileType::Binary) => "machine code",
            None => "unknown"
        };
        let ans = json::object! {
            dragondos: {
                file_type: hex::encode_upper([self.header.file_type]),
                file_type_name: type_name,
                load_address: hex::encode_upper(u16::to_be_bytes(self.header.load_address)),
                length: self.header.length,
                exec_address: hex::encode_upper(u16::to_be_bytes(self.header.exec_address))
            },
            data: hex::encode_upper(&self.data)
        };
        if let Some(spaces) = indent {
            return json::stringify_pretty(ans, spaces);
        } else {
            return json::stringify(ans);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_01_DOS_DUMP: &str = "550112340008 5678AA 123a000a87000000";

    fn decode(hex_str: &str) -> Vec<u8> {
        hex::decode(hex_str.replace(' ',"")).expect("hex")
    }

    #[test]
    fn pack() {
        let bin = DragonDosBinary::new(FileType::Basic,0x1234,0x5678,decode("123a000a87000000")).expect("fits");
        assert_eq!(bin.to_bytes().expect("write"),decode(LISTING_01_DOS_DUMP));
    }

    #[test]
    fn unpack() {
        let bin = DragonDosBinary::from_bytes(&decode(LISTING_01_DOS_DUMP)).expect("valid");
        assert_eq!(bin.file_type(),Some(FileType::Basic));
        assert_eq!(bin.header.load_address,0x1234);
        assert_eq!(bin.header.exec_address,0x5678);
        assert_eq!(bin.header.length,8);
        assert_eq!(bin.data,decode("123a000a87000000"));
    }

    #[test]
    fn padding_ignored() {
        let mut data = decode(LISTING_01_DOS_DUMP);
        data.extend_from_slice(&[0;7]);
        let bin = DragonDosBinary::from_bytes(&data).expect("valid");
        assert_eq!(bin.data.len(),8);
    }

    #[test]
    fn short_payload() {
        let data = decode(LISTING_01_DOS_DUMP);
        assert!(matches!(DragonDosBinary::from_bytes(&data[0..12]),Err(Error::LengthMismatch { declared: 8, actual: 3 })));
        assert!(matches!(DragonDosBinary::from_bytes(&data[0..5]),Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn bad_markers() {
        let mut data = decode(LISTING_01_DOS_DUMP);
        data[8] = 0xab;
        assert!(matches!(DragonDosBinary::from_bytes(&data),Err(Error::BadMarker { offset: 8, expected: 0xaa, found: 0xab })));
        data[0] = 0x56;
        assert!(matches!(DragonDosBinary::from_bytes(&data),Err(Error::BadMarker { offset: 0, .. })));
    }

    #[test]
    fn json_metadata() {
        let bin = DragonDosBinary::from_bytes(&decode(LISTING_01_DOS_DUMP)).expect("valid");
        let parsed = json::parse(&bin.to_json(Some(2))).expect("json");
        assert_eq!(parsed["dragondos"]["file_type"],"01");
        assert_eq!(parsed["dragondos"]["file_type_name"],"BASIC");
        assert_eq!(parsed["dragondos"]["load_address"],"1234");
        assert_eq!(parsed["dragondos"]["length"],8);
        assert_eq!(parsed["dragondos"]["exec_address"],"5678");
        assert_eq!(parsed["data"],"123A000A87000000");
    }
}
