// minecraft-check - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies. These types are the shared vocabulary across
// the scan, filter, and report layers.

use crate::util::constants;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

// =============================================================================
// Parsed timestamp
// =============================================================================

/// Calendar position extracted from a syslog line prefix.
///
/// Syslog (RFC 3164) timestamps carry no year, so none is stored here;
/// the year is inferred at comparison time. A log rotated across a year
/// boundary (a December line scanned in January) is therefore compared
/// against the wrong year. Known limitation, deliberately not corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParsedTimestamp {
    /// Calendar month, 1-12.
    pub month: u32,

    /// Day of month, 1-31 (not validated against the month length here).
    pub day: u32,

    /// Time of day, when the prefix carried one.
    pub time: Option<NaiveTime>,
}

impl ParsedTimestamp {
    /// Resolve to a full timestamp by injecting `year`.
    ///
    /// A missing time-of-day resolves to midnight. Returns `None` when the
    /// month/day pair does not exist in `year` (e.g. Feb 29 in a non-leap
    /// year); such entries are excluded from rolling-window comparisons.
    pub fn resolve(&self, year: i32) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(year, self.month, self.day)?;
        // NaiveTime::default() is midnight.
        Some(date.and_time(self.time.unwrap_or_default()))
    }
}

// =============================================================================
// Matched entry
// =============================================================================

/// A log line that survived the extract/filter/match pipeline.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedEntry {
    /// Timestamp extracted from the line prefix.
    pub timestamp: ParsedTimestamp,

    /// Raw line text with trailing whitespace stripped.
    pub text: String,
}

// =============================================================================
// Reporting window
// =============================================================================

/// Which reporting window a run uses. Selected once from config at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// Yesterday, as a calendar day: month and day must match, year and
    /// time-of-day are ignored.
    #[default]
    CalendarDay,

    /// The last 24 hours, measured back from the current instant.
    RollingHours,
}

impl WindowPolicy {
    /// Parse a config-file value. Returns `None` for unrecognised values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "calendar-day" => Some(Self::CalendarDay),
            "rolling-24h" => Some(Self::RollingHours),
            _ => None,
        }
    }
}

/// Concrete reporting window, constructed once at startup from the policy
/// and a captured "now". Constant for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportWindow {
    /// Accept entries whose month/day equal this calendar day's.
    CalendarDay { day: NaiveDate },

    /// Accept entries at or after `since`, resolving year-less timestamps
    /// with `assumed_year`.
    RollingHours {
        since: NaiveDateTime,
        assumed_year: i32,
    },
}

impl ReportWindow {
    /// Build the window for a run starting at `now` (local time).
    pub fn from_policy(policy: WindowPolicy, now: NaiveDateTime) -> Self {
        match policy {
            WindowPolicy::CalendarDay => Self::CalendarDay {
                day: (now - Duration::days(1)).date(),
            },
            WindowPolicy::RollingHours => Self::RollingHours {
                since: now - Duration::hours(constants::ROLLING_WINDOW_HOURS),
                assumed_year: now.year(),
            },
        }
    }
}

// =============================================================================
// Transport policy
// =============================================================================

/// How the mail reporter connects to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportPolicy {
    /// Implicit TLS from the first byte (port 465).
    #[default]
    Smtps,

    /// Plaintext connect upgraded via STARTTLS (port 587).
    StartTls,
}

impl TransportPolicy {
    /// Parse a config-file value. Returns `None` for unrecognised values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "smtps" => Some(Self::Smtps),
            "starttls" => Some(Self::StartTls),
            _ => None,
        }
    }
}

// =============================================================================
// Report
// =============================================================================

/// The finished aggregate: report text plus the window it covers.
/// The window drives the email subject line.
#[derive(Debug, Clone)]
pub struct Report {
    /// Window this report covers.
    pub window: ReportWindow,

    /// Aggregated report text: per-file groups in file-list order,
    /// separated by one blank line.
    pub body: String,

    /// Total matched entries across all files.
    pub entry_count: usize,
}
