// minecraft-check - core/scan.rs
//
// File scanning and report aggregation.
// Scans one file at a time, in the fixed path-list order; no parallel I/O.

use crate::core::filter::{in_window, keyword_match};
use crate::core::model::{MatchedEntry, Report, ReportWindow};
use crate::core::parser::extract_timestamp;
use crate::util::error::ScanError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scan one log file, collecting lines that carry an in-window timestamp
/// and contain the keyword. Entries keep file-read order; trailing
/// whitespace is stripped.
///
/// An unreadable path is a fatal error for the whole run — the caller must
/// propagate it, never produce a partial report. Lines without a parseable
/// timestamp prefix are skipped silently (debug-level log only).
pub fn scan_file(
    path: &Path,
    window: &ReportWindow,
    keyword: &str,
) -> Result<Vec<MatchedEntry>, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    let mut lines_total: u64 = 0;
    let mut lines_unparseable: u64 = 0;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| ScanError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        lines_total += 1;

        let Some(timestamp) = extract_timestamp(&line) else {
            lines_unparseable += 1;
            continue;
        };

        if in_window(window, &timestamp) && keyword_match(&line, keyword) {
            entries.push(MatchedEntry {
                timestamp,
                text: line.trim_end().to_string(),
            });
        }
    }

    tracing::debug!(
        file = %path.display(),
        lines = lines_total,
        unparseable = lines_unparseable,
        matched = entries.len(),
        "Scan complete"
    );

    Ok(entries)
}

/// Scan every path in `paths`, in order, aborting on the first failure.
/// Returns one entry group per file, in path-list order.
pub fn scan_all(
    paths: &[&Path],
    window: &ReportWindow,
    keyword: &str,
) -> Result<Vec<Vec<MatchedEntry>>, ScanError> {
    paths
        .iter()
        .map(|path| scan_file(path, window, keyword))
        .collect()
}

/// Aggregate per-file entry groups into the final report.
///
/// Groups are joined in file-list order with exactly one blank line between
/// them. When `sorted` is set, each group is ordered ascending by month and
/// day before joining. Every entry carries a valid timestamp by construction,
/// so the sort never has to order an unparseable entry. Time-of-day does not
/// participate and the sort is stable, so same-day entries keep file-read
/// order. Month/day comparison is correct within a single year only; it does
/// not compensate for logs rotated across a year boundary.
pub fn aggregate(mut groups: Vec<Vec<MatchedEntry>>, window: ReportWindow, sorted: bool) -> Report {
    if sorted {
        for group in &mut groups {
            group.sort_by_key(|entry| (entry.timestamp.month, entry.timestamp.day));
        }
    }

    let entry_count = groups.iter().map(Vec::len).sum();

    let body = groups
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|entry| entry.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Report {
        window,
        body,
        entry_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ParsedTimestamp, WindowPolicy};
    use chrono::NaiveDate;

    fn window_for(y: i32, mo: u32, d: u32) -> ReportWindow {
        let now = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        ReportWindow::from_policy(WindowPolicy::CalendarDay, now)
    }

    fn entry(month: u32, day: u32, text: &str) -> MatchedEntry {
        MatchedEntry {
            timestamp: ParsedTimestamp {
                month,
                day,
                time: None,
            },
            text: text.to_string(),
        }
    }

    fn entry_at(month: u32, day: u32, (h, m, s): (u32, u32, u32), text: &str) -> MatchedEntry {
        MatchedEntry {
            timestamp: ParsedTimestamp {
                month,
                day,
                time: chrono::NaiveTime::from_hms_opt(h, m, s),
            },
            text: text.to_string(),
        }
    }

    #[test]
    fn test_aggregate_preserves_file_list_order() {
        let window = window_for(2026, 1, 6);
        let groups = vec![
            vec![entry(1, 5, "from current log")],
            vec![entry(1, 5, "from rotated log")],
        ];
        let report = aggregate(groups, window, false);
        assert_eq!(report.body, "from current log\n\nfrom rotated log");
        assert_eq!(report.entry_count, 2);
    }

    #[test]
    fn test_aggregate_single_blank_line_separator() {
        let window = window_for(2026, 1, 6);
        let groups = vec![
            vec![entry(1, 5, "a"), entry(1, 5, "b")],
            vec![entry(1, 5, "c")],
        ];
        let report = aggregate(groups, window, false);
        assert_eq!(report.body, "a\nb\n\nc");
    }

    #[test]
    fn test_aggregate_sorted_orders_within_group() {
        // Jan 10 before Jan 2 in input order; sorted output flips them.
        let window = window_for(2026, 1, 11);
        let groups = vec![vec![entry(1, 10, "Jan 10 line"), entry(1, 2, "Jan 2 line")]];
        let report = aggregate(groups, window, true);
        assert_eq!(report.body, "Jan 2 line\nJan 10 line");
    }

    #[test]
    fn test_aggregate_sorted_same_day_keeps_read_order() {
        // The sort key is month and day only; time-of-day never reorders
        // same-day entries, so a 20:00 line read before an 08:00 line
        // stays first.
        let window = window_for(2026, 1, 6);
        let groups = vec![vec![
            entry_at(1, 5, (20, 0, 0), "evening line"),
            entry_at(1, 5, (8, 0, 0), "morning line"),
        ]];
        let report = aggregate(groups, window, true);
        assert_eq!(report.body, "evening line\nmorning line");
    }

    #[test]
    fn test_aggregate_sort_does_not_cross_file_groups() {
        // The rotated log holds older entries but stays second: sorting is
        // per-group, file-list order wins at the top level.
        let window = window_for(2026, 1, 6);
        let groups = vec![vec![entry(1, 5, "newer file")], vec![entry(1, 2, "older file")]];
        let report = aggregate(groups, window, true);
        assert_eq!(report.body, "newer file\n\nolder file");
    }

    #[test]
    fn test_aggregate_unsorted_keeps_read_order() {
        let window = window_for(2026, 1, 11);
        let groups = vec![vec![entry(1, 10, "second"), entry(1, 2, "first")]];
        let report = aggregate(groups, window, false);
        assert_eq!(report.body, "second\nfirst");
    }

    #[test]
    fn test_aggregate_empty_groups() {
        let window = window_for(2026, 1, 6);
        let report = aggregate(vec![vec![], vec![]], window, true);
        assert_eq!(report.body, "\n\n");
        assert_eq!(report.entry_count, 0);
    }
}
