// minecraft-check - core/filter.rs
//
// Reporting-window filter and keyword matcher.
// Core layer: pure logic, no I/O.

use crate::core::model::{ParsedTimestamp, ReportWindow};
use chrono::Datelike;

/// Check whether an extracted timestamp falls inside the reporting window.
///
/// CalendarDay compares month and day only — year and time-of-day are
/// ignored. RollingHours resolves the timestamp with the window's assumed
/// year and compares against the window start; a timestamp that does not
/// exist in the assumed year (Feb 29 outside a leap year) is excluded.
pub fn in_window(window: &ReportWindow, ts: &ParsedTimestamp) -> bool {
    match window {
        ReportWindow::CalendarDay { day } => ts.month == day.month() && ts.day == day.day(),
        ReportWindow::RollingHours { since, assumed_year } => match ts.resolve(*assumed_year) {
            Some(resolved) => resolved >= *since,
            None => false,
        },
    }
}

/// Case-insensitive substring test for `keyword` against the full raw line.
/// No word-boundary logic: "gamepad" matches the keyword "game".
pub fn keyword_match(line: &str, keyword: &str) -> bool {
    line.to_lowercase().contains(&keyword.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::WindowPolicy;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn ts(month: u32, day: u32, hms: Option<(u32, u32, u32)>) -> ParsedTimestamp {
        ParsedTimestamp {
            month,
            day,
            time: hms.and_then(|(h, m, s)| chrono::NaiveTime::from_hms_opt(h, m, s)),
        }
    }

    // -------------------------------------------------------------------------
    // CalendarDay policy
    // -------------------------------------------------------------------------

    #[test]
    fn test_calendar_day_accepts_yesterday() {
        // System date Jan 6 -> window day is Jan 5.
        let window = ReportWindow::from_policy(WindowPolicy::CalendarDay, at(2026, 1, 6, 8, 0, 0));
        assert!(in_window(&window, &ts(1, 5, Some((12, 0, 1)))));
    }

    #[test]
    fn test_calendar_day_ignores_time_of_day() {
        let window = ReportWindow::from_policy(WindowPolicy::CalendarDay, at(2026, 1, 6, 8, 0, 0));
        assert!(in_window(&window, &ts(1, 5, None)));
        assert!(in_window(&window, &ts(1, 5, Some((23, 59, 59)))));
    }

    #[test]
    fn test_calendar_day_excludes_today_and_older() {
        let window = ReportWindow::from_policy(WindowPolicy::CalendarDay, at(2026, 1, 6, 8, 0, 0));
        assert!(!in_window(&window, &ts(1, 6, Some((0, 0, 1)))), "today");
        assert!(!in_window(&window, &ts(1, 4, Some((12, 0, 0)))), "two days ago");
        assert!(!in_window(&window, &ts(12, 5, Some((12, 0, 0)))), "other month");
    }

    #[test]
    fn test_calendar_day_across_month_boundary() {
        // System date Mar 1 -> yesterday is Feb 28 (2026 is not a leap year).
        let window = ReportWindow::from_policy(WindowPolicy::CalendarDay, at(2026, 3, 1, 8, 0, 0));
        assert!(in_window(&window, &ts(2, 28, None)));
        assert!(!in_window(&window, &ts(3, 1, None)));
    }

    // -------------------------------------------------------------------------
    // RollingHours policy
    // -------------------------------------------------------------------------

    #[test]
    fn test_rolling_includes_within_24h() {
        // Line: Jan 5 12:00:01. Evaluated Jan 6 11:00:00 -> 23h old, included.
        let window = ReportWindow::from_policy(WindowPolicy::RollingHours, at(2026, 1, 6, 11, 0, 0));
        assert!(in_window(&window, &ts(1, 5, Some((12, 0, 1)))));
    }

    #[test]
    fn test_rolling_excludes_older_than_24h() {
        // Same line evaluated Jan 6 13:00:00 -> 25h old, excluded.
        let window = ReportWindow::from_policy(WindowPolicy::RollingHours, at(2026, 1, 6, 13, 0, 0));
        assert!(!in_window(&window, &ts(1, 5, Some((12, 0, 1)))));
    }

    #[test]
    fn test_rolling_boundary_is_inclusive() {
        let window = ReportWindow::from_policy(WindowPolicy::RollingHours, at(2026, 1, 6, 12, 0, 1));
        assert!(in_window(&window, &ts(1, 5, Some((12, 0, 1)))));
    }

    #[test]
    fn test_rolling_missing_time_resolves_to_midnight() {
        // Window starts Jan 5 06:00; a date-only Jan 5 entry is midnight,
        // which is before the window start.
        let window = ReportWindow::from_policy(WindowPolicy::RollingHours, at(2026, 1, 6, 6, 0, 0));
        assert!(!in_window(&window, &ts(1, 5, None)));
        assert!(in_window(&window, &ts(1, 6, None)));
    }

    #[test]
    fn test_rolling_excludes_unresolvable_date() {
        // Feb 29 does not exist in 2026.
        let window = ReportWindow::from_policy(WindowPolicy::RollingHours, at(2026, 3, 1, 0, 0, 0));
        assert!(!in_window(&window, &ts(2, 29, Some((23, 0, 0)))));
    }

    // -------------------------------------------------------------------------
    // Keyword matcher
    // -------------------------------------------------------------------------

    #[test]
    fn test_keyword_case_insensitive() {
        assert!(keyword_match("starting Game server", "game"));
        assert!(keyword_match("GAME over", "game"));
        assert!(keyword_match("game on", "game"));
    }

    #[test]
    fn test_keyword_substring_no_word_boundary() {
        assert!(keyword_match("gamepad connected", "game"));
        assert!(keyword_match("pregame warmup", "game"));
    }

    #[test]
    fn test_keyword_absent() {
        assert!(!keyword_match("kernel: eth0 link up", "game"));
        assert!(!keyword_match("", "game"));
    }
}
