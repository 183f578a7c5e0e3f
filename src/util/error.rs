// minecraft-check - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All fatal errors abort the run; no string-based propagation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a minecraft-check run.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CheckError {
    /// Configuration file loading or validation failed.
    Config(ConfigError),

    /// A log file could not be scanned.
    Scan(ScanError),

    /// Email construction or delivery failed.
    Mail(MailError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Scan(e) => write!(f, "Scan error: {e}"),
            Self::Mail(e) => write!(f, "Mail error: {e}"),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Scan(e) => Some(e),
            Self::Mail(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read or parsed as INI.
    Load { path: PathBuf, source: ini::Error },

    /// A required section is absent from the config file.
    MissingSection { path: PathBuf, section: &'static str },

    /// A required key is absent from its section.
    MissingKey {
        path: PathBuf,
        section: &'static str,
        key: &'static str,
    },

    /// A config value is not one of the allowed choices.
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// The platform config directory could not be determined.
    NoConfigDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, source } => {
                write!(f, "Cannot load config '{}': {source}", path.display())
            }
            Self::MissingSection { path, section } => write!(
                f,
                "Config '{}': missing required section [{section}]",
                path.display()
            ),
            Self::MissingKey { path, section, key } => write!(
                f,
                "Config '{}': missing required key '{key}' in section [{section}]",
                path.display()
            ),
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(
                f,
                "Config '{key}' = '{value}' is not valid. Expected: {expected}"
            ),
            Self::NoConfigDir => {
                write!(f, "Could not determine the platform config directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CheckError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Scan errors
// ---------------------------------------------------------------------------

/// Errors related to log file scanning. Any of these aborts the run —
/// a partial report is never produced.
#[derive(Debug)]
pub enum ScanError {
    /// A configured log path could not be opened for reading.
    FileAccess { path: PathBuf, source: io::Error },

    /// I/O failure while reading lines from an open log file.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess { path, source } => {
                write!(f, "Cannot open log file '{}': {source}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "I/O error reading '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
        }
    }
}

impl From<ScanError> for CheckError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

// ---------------------------------------------------------------------------
// Mail errors
// ---------------------------------------------------------------------------

/// Errors related to email construction and SMTP delivery.
#[derive(Debug)]
pub enum MailError {
    /// A sender or receiver address from the config failed to parse.
    Address {
        field: &'static str,
        address: String,
        source: lettre::address::AddressError,
    },

    /// The message itself could not be assembled.
    Build { source: lettre::error::Error },

    /// SMTP connection, authentication, or protocol failure during send.
    Transport {
        source: lettre::transport::smtp::Error,
    },
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address {
                field,
                address,
                source,
            } => write!(f, "Invalid {field} address '{address}': {source}"),
            Self::Build { source } => write!(f, "Cannot build email message: {source}"),
            Self::Transport { source } => write!(f, "SMTP delivery failed: {source}"),
        }
    }
}

impl std::error::Error for MailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Address { source, .. } => Some(source),
            Self::Build { source } => Some(source),
            Self::Transport { source } => Some(source),
        }
    }
}

impl From<MailError> for CheckError {
    fn from(e: MailError) -> Self {
        Self::Mail(e)
    }
}

/// Convenience type alias for minecraft-check results.
pub type Result<T> = std::result::Result<T, CheckError>;
