//! ## Renumber Module
//!
//! Renumbering works on the listing text.  Line `k` (counting non-blank lines from 1)
//! becomes line `10*k`, and the targets of `GOTO`, `GOSUB`, `THEN`, `ELSE`, and the
//! lists after `ON ... GOTO/GOSUB` follow.  A target with no matching line is left as written.

use std::collections::{BTreeSet,HashMap};
use regex::{Captures,Regex};
use log::{debug,error,info,warn};
use crate::lang::Diagnostic;

const LINE_PATT: &str = r"^(?P<no>\d+)(?P<code>.*)$";
const REF_PATT: &str = r"(?P<statement>GOTO|GOSUB|THEN|ELSE)(?P<space>\s*)(?P<no>\d[\d,\s]*)";
const STEP: usize = 10;

fn iter_lines(listing: &str) -> impl Iterator<Item=&str> {
    listing.lines().map(str::trim).filter(|l| !l.is_empty())
}

pub struct Renumberer {
    line_patt: Regex,
    ref_patt: Regex,
    diagnostics: Vec<Diagnostic>
}

impl Renumberer {
    pub fn new() -> Self {
        Self {
            line_patt: Regex::new(LINE_PATT).expect("unreachable"),
            ref_patt: Regex::new(REF_PATT).expect("unreachable"),
            diagnostics: Vec::new()
        }
    }
    /// diagnostics gathered since the last call
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
    /// Map old line number text to the new number.  If a number is defined twice the later line wins.
    pub fn renum_map(&self, listing: &str) -> HashMap<String,usize> {
        let mut ans = HashMap::new();
        for (k,line) in iter_lines(listing).enumerate() {
            if let Some(caps) = self.line_patt.captures(line) {
                let old = caps["no"].to_string();
                if let Some(prev) = ans.insert(old.clone(),STEP*(k+1)) {
                    warn!("line {} is defined more than once, dropping new number {}",old,prev);
                }
            }
        }
        ans
    }
    /// Renumber a listing, blank lines are dropped and lines are joined with `\n`.
    pub fn renumber(&mut self, listing: &str) -> String {
        let map = self.renum_map(listing);
        let mut pairs: Vec<(&String,&usize)> = map.iter().collect();
        pairs.sort();
        info!("renum: {}",pairs.iter().map(|(o,n)| format!("{}->{}",o,n)).collect::<Vec<String>>().join(", "));
        let mut found = Vec::new();
        let mut ans = Vec::new();
        for (k,line) in iter_lines(listing).enumerate() {
            let numbered = match self.line_patt.captures(line) {
                Some(caps) => format!("{}{}",STEP*(k+1),&caps["code"]),
                None => {
                    let diag = Diagnostic::MissingLineNumber(line.to_string());
                    error!("{}",diag);
                    found.push(diag);
                    line.to_string()
                }
            };
            let new_line = self.ref_patt.replace_all(&numbered,|caps: &Captures| {
                replace_targets(caps,&map,&numbered,&mut found)
            }).to_string();
            debug!("{:?} -> {:?}",line,new_line);
            ans.push(new_line);
        }
        self.diagnostics.append(&mut found);
        ans.join("\n")
    }
    /// Every line number that appears as a jump target, ascending
    pub fn get_destinations(&self, listing: &str) -> BTreeSet<usize> {
        let mut ans = BTreeSet::new();
        for line in iter_lines(listing) {
            for caps in self.ref_patt.captures_iter(line) {
                for num in caps["no"].split(',') {
                    if let Ok(n) = num.trim().parse::<usize>() {
                        ans.insert(n);
                    }
                }
            }
        }
        ans
    }
}

/// Rewrite one reference match.  Whitespace that ends the match is kept as it was,
/// e.g. the space between a target list and a following comment.
fn replace_targets(caps: &Captures, map: &HashMap<String,usize>, line: &str, found: &mut Vec<Diagnostic>) -> String {
    let numbers = &caps["no"];
    let list = numbers.trim_end();
    let trailing = &numbers[list.len()..];
    let new_numbers: Vec<String> = list.split(',').map(|old| {
        let old = old.trim();
        if old.is_empty() {
            return String::new();
        }
        match map.get(old) {
            Some(new) => new.to_string(),
            None => {
                let diag = Diagnostic::DanglingReference { line: line.to_string(), target: old.to_string() };
                error!("{}",diag);
                found.push(diag);
                old.to_string()
            }
        }
    }).collect();
    [&caps["statement"],&caps["space"],new_numbers.join(",").as_str(),trailing].concat()
}
