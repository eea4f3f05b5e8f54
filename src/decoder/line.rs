use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::accumulator::Accumulator;
use crate::model::parse_time;

// The attribute seeded by a matching header line. An explicit
// `Timestamp = ...` attribute later in the block overwrites it.
pub(super) const TIMESTAMP_ATTR: &str = "Timestamp";

// Applies one input line (terminator already stripped) to the accumulator.
// Returns true when the line terminates the current block.
//
// The header rule and the attribute rule are evaluated independently, not
// as alternatives: a line may in principle satisfy both.
pub(super) fn classify(line: &str, timestamp_format: Option<&str>, acc: &mut Accumulator) -> bool {
    lazy_static! {
        static ref ATTR_RE: Regex = Regex::new(r"^\s*([^=]*?)\s*=\s*(.*?)\s*$").unwrap();
    }

    if line.is_empty() {
        return true;
    }

    if let Some(format) = timestamp_format {
        if let Ok(ts) = parse_time(line, format) {
            acc.insert(TIMESTAMP_ATTR.into(), (ts / 1000).to_string());
        }
    }

    match ATTR_RE.captures(line) {
        Some(caps) => {
            let key = &caps[1];
            if !key.is_empty() {
                acc.insert(key.into(), unquote(&caps[2]).into());
            }
        }
        None => trace!("dropping unclassifiable line: {}", line),
    }

    false
}

// Removes exactly one pair of enclosing double quotes; inner quotes are
// kept, and a lone quote character is not a pair.
fn unquote(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
