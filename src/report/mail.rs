// minecraft-check - report/mail.rs
//
// SMTP delivery of the aggregated report.
//
// One blocking send per run against the Gmail relay; no retries, no
// timeout handling beyond what the transport provides. Authentication,
// network, and address failures all propagate and abort the run.

use crate::core::model::{Report, TransportPolicy};
use crate::platform::config::Settings;
use crate::util::constants;
use crate::util::error::MailError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// Build the plain-text report message.
fn build_message(report: &Report, settings: &Settings) -> Result<Message, MailError> {
    let from: Mailbox = settings
        .sender_email
        .parse()
        .map_err(|e| MailError::Address {
            field: "sender",
            address: settings.sender_email.clone(),
            source: e,
        })?;
    let to: Mailbox = settings
        .receiver_email
        .parse()
        .map_err(|e| MailError::Address {
            field: "receiver",
            address: settings.receiver_email.clone(),
            source: e,
        })?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(super::subject(&report.window))
        .header(ContentType::TEXT_PLAIN)
        .body(report.body.clone())
        .map_err(|e| MailError::Build { source: e })
}

/// Build the relay transport for the configured connection style.
///
/// Smtps wraps the session in TLS from the first byte (port 465, what the
/// Gmail relay calls SMTPS); StartTls connects in plaintext on port 587 and
/// upgrades before authenticating.
fn build_transport(settings: &Settings) -> Result<SmtpTransport, MailError> {
    let builder = match settings.transport {
        TransportPolicy::Smtps => SmtpTransport::relay(constants::SMTP_RELAY_HOST),
        TransportPolicy::StartTls => SmtpTransport::starttls_relay(constants::SMTP_RELAY_HOST),
    }
    .map_err(|e| MailError::Transport { source: e })?;

    Ok(builder
        .credentials(Credentials::new(
            settings.sender_email.clone(),
            settings.password.clone(),
        ))
        .build())
}

/// Send the report as an email. Connects, authenticates, transmits, and
/// closes; any failure propagates without retry.
pub fn send_report(report: &Report, settings: &Settings) -> Result<(), MailError> {
    let message = build_message(report, settings)?;
    let mailer = build_transport(settings)?;

    tracing::info!(
        relay = constants::SMTP_RELAY_HOST,
        transport = ?settings.transport,
        entries = report.entry_count,
        "Sending report email"
    );

    mailer
        .send(&message)
        .map_err(|e| MailError::Transport { source: e })?;

    tracing::info!(receiver = %settings.receiver_email, "Report email sent");
    Ok(())
}
