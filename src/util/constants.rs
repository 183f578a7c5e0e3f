// minecraft-check - util/constants.rs
//
// Single source of truth for all named constants, paths, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "minecraft-check";

/// Application identifier used for the config directory
/// (`~/.config/minecraft-check/` on Linux).
pub const APP_ID: &str = "minecraft-check";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Scan inputs
// =============================================================================

/// Fixed list of syslog paths scanned per run: the live log and its first
/// rotation, in that order. Aggregation preserves this order.
pub const SYSLOG_PATHS: &[&str] = &["/var/log/syslog", "/var/log/syslog.1"];

/// Default keyword searched for in each log line (case-insensitive substring,
/// no word-boundary logic).
pub const DEFAULT_KEYWORD: &str = "game";

// =============================================================================
// Reporting window
// =============================================================================

/// Width of the rolling reporting window in hours.
pub const ROLLING_WINDOW_HOURS: i64 = 24;

// =============================================================================
// Mail delivery
// =============================================================================

/// Outbound mail relay host.
pub const SMTP_RELAY_HOST: &str = "smtp.gmail.com";

// =============================================================================
// Configuration
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "minecraft-check.conf";

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
