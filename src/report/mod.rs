// minecraft-check - report/mod.rs
//
// Report delivery: console output or SMTP email.
// Consumes the aggregated Report; never reaches back into the scan layer.

pub mod mail;

use crate::core::model::{Report, ReportWindow};

/// Email subject line naming the report's scope.
pub fn subject(window: &ReportWindow) -> String {
    match window {
        ReportWindow::CalendarDay { day } => {
            format!("Minecraft Activity Report from {}", day.format("%b %d"))
        }
        ReportWindow::RollingHours { .. } => {
            "Minecraft Activity Report for the last 24 hours".to_string()
        }
    }
}

/// Console mode: write the full report text to standard output.
/// No network connection is attempted.
pub fn print_report(report: &Report) {
    println!("{}", report.body);
}
