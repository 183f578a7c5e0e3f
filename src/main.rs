// minecraft-check - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config loading and validation
// 4. Scan -> aggregate -> deliver pipeline

use clap::Parser;
use minecraft_check::core::model::{Report, ReportWindow};
use minecraft_check::core::scan;
use minecraft_check::platform::config::{self, Settings};
use minecraft_check::report;
use minecraft_check::util;
use minecraft_check::util::constants;
use minecraft_check::util::error::Result;
use std::path::Path;

/// minecraft-check - Scan syslog for game-server activity and report it.
///
/// Reads the current syslog and its first rotation, keeps lines that
/// mention the configured keyword inside the reporting window, and emails
/// the aggregate (or prints it with --no-email). Intended to run from cron.
#[derive(Parser, Debug)]
#[command(name = "minecraft-check", version, about)]
struct Cli {
    /// Print the report to standard output instead of sending the email.
    #[arg(long = "no-email")]
    no_email: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Run the whole pipeline. Any fatal error aborts before a partial report
/// can be produced or delivered.
fn run(cli: &Cli) -> Result<()> {
    let config_path = config::config_path()?;
    let settings = Settings::load(&config_path)?;

    let now = chrono::Local::now().naive_local();
    let window = ReportWindow::from_policy(settings.window, now);

    let paths: Vec<&Path> = constants::SYSLOG_PATHS.iter().map(Path::new).collect();
    let groups = scan::scan_all(&paths, &window, &settings.keyword)?;
    let report: Report = scan::aggregate(groups, window, settings.sorted);

    tracing::info!(
        entries = report.entry_count,
        window = ?report.window,
        "Report assembled"
    );

    if cli.no_email {
        report::print_report(&report);
    } else {
        report::mail::send_report(&report, &settings)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        no_email = cli.no_email,
        "minecraft-check starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
