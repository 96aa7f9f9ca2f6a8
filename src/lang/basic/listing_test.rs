#[cfg(test)]
use super::listing::{Listing,Records};
#[cfg(test)]
use super::line::Line;
#[cfg(test)]
use super::tokenizer::Tokenizer;
#[cfg(test)]
use super::Machine;
#[cfg(test)]
use crate::lang::Error;

#[cfg(test)]
fn listing() -> Listing {
	Listing::new(Tokenizer::new(Machine::Dragon32).expect("table failed"))
}

#[cfg(test)]
fn dump(hex_str: &str) -> Vec<u8> {
	hex::decode(hex_str.replace([' ','\n','\t'],"")).expect("bad hex")
}

mod records {
	use super::*;
	#[test]
	fn empty_program() {
		let dat = dump("0000");
		let mut records = Records::new(&dat,0x1e01);
		assert!(records.next().is_none());
		assert!(records.found_end());
		assert_eq!(records.offset(),2);
	}
	#[test]
	fn stops_at_end_marker() {
		let dat = dump("1E07 000A A0 00 0000 1234");
		let mut records = Records::new(&dat,0x1e01);
		let rec = records.next().expect("one record").expect("valid record");
		assert_eq!(rec.next,0x1e07);
		assert_eq!(rec.number,10);
		assert_eq!(rec.tokens,&[0xa0,0x00]);
		assert!(records.next().is_none());
		assert!(records.found_end());
		assert_eq!(records.offset(),8);
	}
	#[test]
	fn exhausted_without_marker() {
		let dat = dump("1E07 000A A0 00");
		let mut records = Records::new(&dat,0x1e01);
		assert!(records.next().expect("one record").is_ok());
		assert!(records.next().is_none());
		assert!(!records.found_end());
		assert_eq!(records.offset(),6);
	}
	#[test]
	fn one_leftover_byte() {
		let dat = dump("1E07 000A A0 00 00");
		let mut records = Records::new(&dat,0x1e01);
		assert!(records.next().expect("one record").is_ok());
		assert!(records.next().is_none());
		assert!(!records.found_end());
	}
	#[test]
	fn address_order() {
		let dat = dump("1E01 000A A0 00 0000");
		let mut records = Records::new(&dat,0x1e01);
		match records.next() {
			Some(Err(Error::AddressOrder { next, start })) => {
				assert_eq!(next,0x1e01);
				assert_eq!(start,0x1e01);
			},
			_ => panic!("expected address order error")
		}
		assert!(records.next().is_none());
	}
	#[test]
	fn next_beyond_dump() {
		let dat = dump("1E20 000A A0 00 0000");
		let mut records = Records::new(&dat,0x1e01);
		assert!(matches!(records.next(),Some(Err(Error::Truncated { offset: 8 }))));
	}
	#[test]
	fn header_cut_short() {
		let dat = dump("1E07 00");
		let mut records = Records::new(&dat,0x1e01);
		assert!(matches!(records.next(),Some(Err(Error::Truncated { .. }))));
	}
	#[test]
	fn no_room_for_terminator() {
		let dat = dump("1E05 000A 0000");
		let mut records = Records::new(&dat,0x1e01);
		assert!(matches!(records.next(),Some(Err(Error::MissingTerminator(_)))));
	}
}

mod dumps {
	use super::*;
	#[test]
	fn no_lines() {
		let listing = listing();
		assert_eq!(listing.lines_to_dump(&[],0x1e01).expect("dump"),vec![0,0]);
	}
	#[test]
	fn address_space_exceeded() {
		let listing = listing();
		let lines = vec![Line::new(10,vec![0x41;0x20])];
		assert!(matches!(listing.lines_to_dump(&lines,0xfff0),Err(Error::ProgramTooLarge)));
	}
	#[test]
	fn lines_kept_in_given_order() {
		let mut listing = listing();
		let lines = listing.ascii_to_lines("20 B=2\n10 A=1").expect("parse");
		assert_eq!(lines[0].number,20);
		assert_eq!(lines[1].number,10);
	}
	#[test]
	fn byte_exact_round_trip() {
		let mut listing = listing();
		let dat = dump("abd3 000a a0 00
			abe6 0014 80204920cb203020bc203235353a 00
			abf9 001e 932031303234c32849c532292c49 00
			ac01 0028 8b2049 00
			ac1a 0032 492420cb20ff9a3a85204924cb222220bf203530 00
			0000");
		let lines = listing.dump_to_lines(&dat,0xabcd).expect("parse dump");
		assert_eq!(lines.len(),5);
		assert_eq!(listing.lines_to_dump(&lines,0xabcd).expect("dump"),dat);
		let txt = listing.dump_to_ascii(&dat,0xabcd).expect("detokenize").join("\n");
		assert_eq!(listing.ascii_to_dump(&txt,0xabcd).expect("tokenize"),dat);
	}
	#[test]
	fn unterminated_line_rejected() {
		let mut listing = listing();
		let dat = dump("1E07 000A A0 41 0000");
		assert!(matches!(listing.dump_to_lines(&dat,0x1e01),Err(Error::MissingTerminator(_))));
	}
}

mod inspect {
	use super::*;
	#[test]
	fn single_line() {
		let mut listing = listing();
		let dat = dump("1E07 000A A0 00 0000");
		let actual = listing.format_dump(&dat,0x1e01).expect("format");
		assert_eq!(actual,vec![
			"program start address: $1e01",
			"$1e07 -> next address (length: 6)",
			"$000a -> 10 (line number)",
			"tokens:",
			"\t  $a0 -> 'CLS'",
			"\t  $00 -> '\\x00'",
			"$0000 -> end address"
		]);
	}
	#[test]
	fn function_token() {
		let mut listing = listing();
		let dat = dump("1E0A 0014 41CBFF84 00 0000");
		let actual = listing.format_dump(&dat,0x1e01).expect("format");
		assert_eq!(actual[5],"\t  $cb -> '='");
		assert_eq!(actual[6],"\t$ff84 -> 'RND'");
	}
	#[test]
	fn missing_end_marker() {
		let mut listing = listing();
		let dat = dump("1E07 000A A0 00");
		assert!(matches!(listing.format_dump(&dat,0x1e01),Err(Error::Truncated { offset: 6 })));
	}
}
