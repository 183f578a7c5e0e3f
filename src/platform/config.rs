// minecraft-check - platform/config.rs
//
// Config file path resolution and INI loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance; on Linux the file lives at
// ~/.config/minecraft-check/minecraft-check.conf.

use crate::core::model::{TransportPolicy, WindowPolicy};
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use ini::Ini;
use std::path::{Path, PathBuf};

/// Resolve the platform-appropriate config file path.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("", "", constants::APP_ID).ok_or(ConfigError::NoConfigDir)?;
    let path = proj_dirs.config_dir().join(constants::CONFIG_FILE_NAME);

    tracing::debug!(config = %path.display(), "Config path resolved");
    Ok(path)
}

/// Validated run configuration. Loaded once at startup, immutable for the
/// run's lifetime. The credentials are handed to the mail reporter and no
/// other component.
#[derive(Debug, Clone)]
pub struct Settings {
    /// `[Email] sender_email` — also the SMTP login user.
    pub sender_email: String,

    /// `[Email] receiver_email`.
    pub receiver_email: String,

    /// `[Email] password` — SMTP app password. Never logged.
    pub password: String,

    /// `[Email] transport` — relay connection style. Default: smtps.
    pub transport: TransportPolicy,

    /// `[Report] window` — reporting window policy. Default: calendar-day.
    pub window: WindowPolicy,

    /// `[Report] sorted` — sort each file's entries by timestamp. Default: true.
    pub sorted: bool,

    /// `[Report] keyword` — case-insensitive search keyword. Default: "game".
    pub keyword: String,
}

impl Settings {
    /// Load and validate settings from the INI file at `path`.
    ///
    /// The `[Email]` section with `sender_email`, `receiver_email`, and
    /// `password` is required; everything else has a default. A missing
    /// file, section, or required key fails the run before any log file
    /// is opened.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let conf = Ini::load_from_file(path).map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            source: e,
        })?;

        let email = conf
            .section(Some("Email"))
            .ok_or(ConfigError::MissingSection {
                path: path.to_path_buf(),
                section: "Email",
            })?;

        let required = |key: &'static str| -> Result<String, ConfigError> {
            email
                .get(key)
                .map(str::to_string)
                .ok_or(ConfigError::MissingKey {
                    path: path.to_path_buf(),
                    section: "Email",
                    key,
                })
        };

        let sender_email = required("sender_email")?;
        let receiver_email = required("receiver_email")?;
        let password = required("password")?;

        let transport = match email.get("transport") {
            Some(value) => {
                TransportPolicy::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                    key: "Email.transport".to_string(),
                    value: value.to_string(),
                    expected: "smtps | starttls",
                })?
            }
            None => TransportPolicy::default(),
        };

        let report = conf.section(Some("Report"));

        let window = match report.and_then(|s| s.get("window")) {
            Some(value) => WindowPolicy::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                key: "Report.window".to_string(),
                value: value.to_string(),
                expected: "calendar-day | rolling-24h",
            })?,
            None => WindowPolicy::default(),
        };

        let sorted = match report.and_then(|s| s.get("sorted")) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "Report.sorted".to_string(),
                        value: value.to_string(),
                        expected: "true | false",
                    })
                }
            },
            None => true,
        };

        let keyword = report
            .and_then(|s| s.get("keyword"))
            .unwrap_or(constants::DEFAULT_KEYWORD)
            .to_string();

        tracing::debug!(
            sender = %sender_email,
            receiver = %receiver_email,
            ?transport,
            ?window,
            sorted,
            keyword = %keyword,
            "Settings loaded"
        );

        Ok(Self {
            sender_email,
            receiver_email,
            password,
            transport,
            window,
            sorted,
            keyword,
        })
    }
}
