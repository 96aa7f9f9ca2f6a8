//! Split the code of a line into segments.
//!
//! Only code segments are tokenized.  String literals, comments, and the items
//! following `DATA` are stored exactly as typed.  Keywords are found with the same
//! maximal munch matcher the tokenizer uses, so both agree on where a keyword is.

use super::token_table::TokenTable;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum SegmentKind {
    Code,
    /// string literal including its quotes, the closing quote may be missing at end of line
    String,
    /// everything after `REM` or `'`
    Comment,
    /// items after `DATA` up to a colon that is outside quotes
    Data
}

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String
}

impl Segment {
    fn new(kind: SegmentKind, text: &str) -> Self {
        Self { kind, text: text.to_string() }
    }
}

fn flush(ans: &mut Vec<Segment>, code: &mut String) {
    if !code.is_empty() {
        ans.push(Segment::new(SegmentKind::Code,code));
        code.clear();
    }
}

/// end of data items, i.e., offset of the first colon outside quotes
fn data_end(text: &str) -> usize {
    let mut in_quotes = false;
    for (i,c) in text.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return i,
            _ => {}
        }
    }
    text.len()
}

/// Classify the code of one line (line number already removed).
/// Concatenating the segment texts gives back `code`.
pub fn classify(code: &str, table: &TokenTable) -> Vec<Segment> {
    let mut ans = Vec::new();
    let mut curr = String::new();
    let mut rest = code;
    while let Some(c) = rest.chars().next() {
        if c == '"' {
            flush(&mut ans,&mut curr);
            let end = match rest[1..].find('"') {
                Some(i) => i + 2,
                None => rest.len()
            };
            ans.push(Segment::new(SegmentKind::String,&rest[..end]));
            rest = &rest[end..];
            continue;
        }
        if let Some(kw) = table.longest_match(rest) {
            curr += kw;
            rest = &rest[kw.len()..];
            match kw {
                "REM" | "'" => {
                    flush(&mut ans,&mut curr);
                    if !rest.is_empty() {
                        ans.push(Segment::new(SegmentKind::Comment,rest));
                    }
                    rest = "";
                },
                "DATA" => {
                    flush(&mut ans,&mut curr);
                    let end = data_end(rest);
                    if end > 0 {
                        ans.push(Segment::new(SegmentKind::Data,&rest[..end]));
                    }
                    rest = &rest[end..];
                },
                _ => {}
            }
            continue;
        }
        curr.push(c);
        rest = &rest[c.len_utf8()..];
    }
    flush(&mut ans,&mut curr);
    ans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::basic::Machine;

    fn kinds(code: &str) -> Vec<(SegmentKind,String)> {
        let table = TokenTable::new(Machine::Dragon32).expect("table");
        classify(code,&table).into_iter().map(|s| (s.kind,s.text)).collect()
    }

    #[test]
    fn strings() {
        assert_eq!(kinds("PRINT \"FOR NEXT\":GOTO 10"),vec![
            (SegmentKind::Code,"PRINT ".to_string()),
            (SegmentKind::String,"\"FOR NEXT\"".to_string()),
            (SegmentKind::Code,":GOTO 10".to_string())
        ]);
        assert_eq!(kinds("PRINT\"OPEN"),vec![
            (SegmentKind::Code,"PRINT".to_string()),
            (SegmentKind::String,"\"OPEN".to_string())
        ]);
    }

    #[test]
    fn comments() {
        assert_eq!(kinds("CLS:REM IF \"THEN"),vec![
            (SegmentKind::Code,"CLS:REM".to_string()),
            (SegmentKind::Comment," IF \"THEN".to_string())
        ]);
        assert_eq!(kinds("'"),vec![(SegmentKind::Code,"'".to_string())]);
    }

    #[test]
    fn data() {
        assert_eq!(kinds("DATA 1,\"A:B\",PRINT:END"),vec![
            (SegmentKind::Code,"DATA".to_string()),
            (SegmentKind::Data," 1,\"A:B\",PRINT".to_string()),
            (SegmentKind::Code,":END".to_string())
        ]);
    }

    #[test]
    fn concatenation_preserved() {
        let code = "A$=\"X\"+B$:DATA 1,2:PRINT A$ ' DONE";
        let joined: String = kinds(code).into_iter().map(|(_,t)| t).collect();
        assert_eq!(joined,code);
    }
}
