// Library level tests of whole programs and Dragon DOS containers.

use std::sync::Arc;
use dragonkit::lang::basic::{Basic,Machine};
use dragonkit::lang::basic::token_table::TokenTable;
use dragonkit::lang::Diagnostic;
use dragonkit::fimg::dragondos::{DragonDosBinary,FileType};
use dragonkit::STDRESULT;

const LISTING_01: &str = "10 PRINT";
const LISTING_01_DOS_DUMP: &str = "55 01 1234 0008 5678 AA 123A 000A 87 00 0000";

const LISTING_02: &str = "10 CLS
20 FOR I = 0 TO 255:
30 POKE 1024+(I*2),I
40 NEXT I
50 I$ = INKEY$:IF I$=\"\" THEN 50";

const LISTING_02_DUMP: &str = "abd3 000a a0 00
abe6 0014 80204920cb203020bc203235353a 00
abf9 001e 932031303234c32849c532292c49 00
ac01 0028 8b2049 00
ac1a 0032 492420cb20ff9a3a85204924cb222220bf203530 00
0000";

fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace([' ','\n'],"")).expect("bad hex")
}

#[test]
fn pack_listing_01() -> STDRESULT {
    let mut basic = Basic::new(Machine::Dragon32)?;
    let actual = basic.bas2bin(LISTING_01,Some(0x1234),Some(0x5678))?;
    assert_eq!(actual,decode(LISTING_01_DOS_DUMP));
    Ok(())
}

#[test]
fn unpack_listing_01() -> STDRESULT {
    let mut basic = Basic::new(Machine::Dragon32)?;
    assert_eq!(basic.bin2bas(&decode(LISTING_01_DOS_DUMP))?,LISTING_01);
    assert!(basic.take_diagnostics().is_empty());
    Ok(())
}

#[test]
fn pack_listing_02() -> STDRESULT {
    let mut basic = Basic::new(Machine::Dragon32)?;
    let actual = basic.bas2bin(LISTING_02,Some(0xabcd),Some(0xdcba))?;
    assert_eq!(&actual[0..9],&decode("55 01 abcd 004f dcba aa"));
    assert_eq!(&actual[9..],&decode(LISTING_02_DUMP));
    assert_eq!(basic.bin2bas(&actual)?,LISTING_02);
    Ok(())
}

#[test]
fn addresses_default_to_program_start() -> STDRESULT {
    let mut basic = Basic::new(Machine::Dragon32)?;
    basic.set_program_start(0x2601);
    let actual = basic.bas2bin("10 CLS",None,None)?;
    assert_eq!(actual,decode("55 01 2601 0008 2601 AA 2607 000A A0 00 0000"));
    Ok(())
}

#[test]
fn machine_code_container() -> STDRESULT {
    let bin = DragonDosBinary::new(FileType::Binary,0x1e01,0x1e01,decode("1E07 000A A0 00 0000"))?;
    let mut basic = Basic::new(Machine::Dragon32)?;
    assert_eq!(basic.bin2bas(&bin.to_bytes()?)?,"10 CLS");
    assert_eq!(basic.take_diagnostics(),vec![Diagnostic::WrongFileType(2)]);
    Ok(())
}

#[test]
fn not_a_container() -> STDRESULT {
    let mut basic = Basic::new(Machine::Dragon32)?;
    assert!(basic.bin2bas(&decode("1E07 000A A0 00 0000")).is_err());
    assert!(basic.bin2bas(&[]).is_err());
    Ok(())
}

#[test]
fn diagnostics_grouped_by_component() -> STDRESULT {
    let mut basic = Basic::new(Machine::Dragon32)?;
    basic.ascii_to_dump("10 PRINT \"\u{263a}\"\n10 CLS",None)?;
    // the tokenizer found its problem first, the facade's comes first anyway
    assert_eq!(basic.take_diagnostics(),vec![
        Diagnostic::DuplicateLine(10),
        Diagnostic::UnmappedChar('\u{263a}')
    ]);
    assert!(basic.take_diagnostics().is_empty());
    Ok(())
}

#[test]
fn renumber_then_tokenize() -> STDRESULT {
    let mut basic = Basic::new(Machine::Dragon32)?;
    let renumbered = basic.renumber("1 GOTO 3\n3 END");
    assert_eq!(renumbered,"10 GOTO 20\n20 END");
    let dump = basic.ascii_to_dump(&renumbered,None)?;
    assert_eq!(dump,decode("1E0B 000A 81BC203230 00 1E11 0014 8A 00 0000"));
    Ok(())
}

#[test]
fn shared_table() -> STDRESULT {
    let table = Arc::new(TokenTable::new(Machine::Dragon32)?);
    let expected = decode(LISTING_02_DUMP);
    std::thread::scope(|s| {
        let mut handles = Vec::new();
        for _ in 0..4 {
            let table = Arc::clone(&table);
            handles.push(s.spawn(move || {
                let mut basic = Basic::with_table(table);
                basic.ascii_to_dump(LISTING_02,Some(0xabcd)).expect("tokenize")
            }));
        }
        for h in handles {
            assert_eq!(h.join().expect("thread panicked"),expected);
        }
    });
    Ok(())
}
