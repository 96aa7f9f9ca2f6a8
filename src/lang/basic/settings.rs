//! Parse a settings string, e.g. from the `--config` option.
//!
//! Keys that are not recognized are ignored, values of the wrong type leave the default.

use std::str::FromStr;
use serde_json;
use log::warn;
use crate::DYNERR;
use crate::lang::{update_json_string,update_json_u16};
use super::{Machine,DEFAULT_PROGRAM_START};

#[derive(Clone,Debug,PartialEq)]
pub struct Settings {
    pub machine: Machine,
    /// address of the first line record in memory
    pub program_start: u16,
    /// container load address, follows `program_start` if not set
    pub load_address: Option<u16>,
    /// container exec address, follows `program_start` if not set
    pub exec_address: Option<u16>
}

impl Settings {
    pub fn new() -> Self {
        Self {
            machine: Machine::Dragon32,
            program_start: DEFAULT_PROGRAM_START,
            load_address: None,
            exec_address: None
        }
    }
    pub fn load_address(&self) -> u16 {
        self.load_address.unwrap_or(self.program_start)
    }
    pub fn exec_address(&self) -> u16 {
        self.exec_address.unwrap_or(self.program_start)
    }
}

fn update_json_opt_u16(obj: &serde_json::Value, key: &str, curr: &mut Option<u16>) {
    if let Some(x) = obj.get(key) {
        match x.as_u64().and_then(|n| u16::try_from(n).ok()) {
            Some(val) => *curr = Some(val),
            None => warn!("setting {} ignored, expected a 16 bit unsigned integer",key)
        }
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    let root = serde_json::from_str::<serde_json::Value>(json)?;
    if let Some(obj) = root.as_object() {
        for key in obj.keys() {
            match key.as_str() {
                "machine" => {
                    let mut name = ans.machine.to_string();
                    update_json_string(&root,"machine",&mut name);
                    match Machine::from_str(&name) {
                        Ok(m) => ans.machine = m,
                        Err(e) => warn!("{}, keeping {}",e,ans.machine)
                    }
                },
                "programStart" => update_json_u16(&root,"programStart",&mut ans.program_start),
                "loadAddress" => update_json_opt_u16(&root,"loadAddress",&mut ans.load_address),
                "execAddress" => update_json_opt_u16(&root,"execAddress",&mut ans.exec_address),
                _ => {}
            }
        }
    } else {
        warn!("settings should be a JSON object");
    }
    Ok(ans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = parse("{}").expect("valid json");
        assert_eq!(settings,Settings::new());
        assert_eq!(settings.load_address(),0x1e01);
        assert_eq!(settings.exec_address(),0x1e01);
    }

    #[test]
    fn all_keys() {
        let settings = parse(r#"{"machine":"cocoext","programStart":9729,"loadAddress":4660,"execAddress":22136,"other":1}"#).expect("valid json");
        assert_eq!(settings.machine,Machine::CoCoExtended);
        assert_eq!(settings.program_start,0x2601);
        assert_eq!(settings.load_address(),0x1234);
        assert_eq!(settings.exec_address(),0x5678);
    }

    #[test]
    fn bad_values_keep_default() {
        let settings = parse(r#"{"machine":"zx81","programStart":70000,"loadAddress":"x"}"#).expect("valid json");
        assert_eq!(settings,Settings::new());
    }

    #[test]
    fn addresses_follow_program_start() {
        let settings = parse(r#"{"programStart":16384}"#).expect("valid json");
        assert_eq!(settings.load_address(),0x4000);
        assert_eq!(settings.exec_address(),0x4000);
    }

    #[test]
    fn not_json() {
        assert!(parse("machine=coco").is_err());
    }
}
