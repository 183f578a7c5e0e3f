// minecraft-check - core/parser.rs
//
// Timestamp extraction from syslog line prefixes.
// Core layer: pure string logic, never touches the filesystem.

use crate::core::model::ParsedTimestamp;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

/// Prefix pattern for BSD syslog (RFC 3164) lines:
/// `<3-letter month> <1-2 digit day>[ <HH:MM:SS>]` at the start of the line,
/// whitespace-flexible between fields (a single-digit day is space-padded
/// by most syslog daemons: `Jan  5`).
fn prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Z][a-z]{2})\s+(\d{1,2})(?:\s+(\d{2}):(\d{2}):(\d{2}))?")
            .expect("prefix_pattern: invalid regex")
    })
}

/// Map a 3-letter English month abbreviation to its 1-12 number.
fn month_number(abbrev: &str) -> Option<u32> {
    match abbrev {
        "Jan" => Some(1),
        "Feb" => Some(2),
        "Mar" => Some(3),
        "Apr" => Some(4),
        "May" => Some(5),
        "Jun" => Some(6),
        "Jul" => Some(7),
        "Aug" => Some(8),
        "Sep" => Some(9),
        "Oct" => Some(10),
        "Nov" => Some(11),
        "Dec" => Some(12),
        _ => None,
    }
}

/// Extract the timestamp from a syslog line prefix.
///
/// The year is never read from the line — syslog timestamps do not carry
/// one. Returns `None` when the prefix does not match the pattern or a
/// field is out of range. An unparseable prefix is not an error: the line
/// is simply excluded downstream.
pub fn extract_timestamp(line: &str) -> Option<ParsedTimestamp> {
    let caps = prefix_pattern().captures(line)?;

    let month = month_number(caps.get(1)?.as_str())?;

    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }

    // Time-of-day is optional; when present, all three fields are.
    let time = match (caps.get(3), caps.get(4), caps.get(5)) {
        (Some(h), Some(m), Some(s)) => {
            let hour: u32 = h.as_str().parse().ok()?;
            let min: u32 = m.as_str().parse().ok()?;
            let sec: u32 = s.as_str().parse().ok()?;
            // Reject lines like "Jan 5 99:00:00" outright rather than
            // silently dropping just the time.
            Some(NaiveTime::from_hms_opt(hour, min, sec)?)
        }
        _ => None,
    };

    Some(ParsedTimestamp { month, day, time })
}
