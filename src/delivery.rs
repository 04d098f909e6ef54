use crate::config::RunConfig;
use crate::credentials::{require, CredentialStore, GMAIL_ADDRESS, GMAIL_APP_PASSWORD};
use crate::types::{DigestError, Result};
use chrono::Local;
use lettre::message::header::ContentType;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::io::Write;
use tracing::{error, info};

/// How many characters of the rendered HTML the preview emits.
pub const PREVIEW_CHARS: usize = 500;

const SMTP_HOST: &str = "smtp.gmail.com";

/// Configured output channel for the rendered digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMethod {
    Preview,
    Smtp,
}

impl DeliveryMethod {
    /// Interpret the configured `email_method` value. Anything other than
    /// "print" or "gmail" is a configuration error naming the value.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "print" => Ok(DeliveryMethod::Preview),
            "gmail" => Ok(DeliveryMethod::Smtp),
            other => Err(DigestError::UnknownDeliveryMethod {
                value: other.to_string(),
            }),
        }
    }
}

/// Dispatch the rendered digest over the configured channel.
pub fn deliver(html: &str, config: &RunConfig, credentials: &dyn CredentialStore) -> Result<()> {
    match DeliveryMethod::parse(&config.email_method)? {
        DeliveryMethod::Preview => preview(html, &config.email, &mut std::io::stdout()),
        DeliveryMethod::Smtp => send_gmail(html, &config.email, credentials),
    }
}

/// Write the recipient address and a fixed-length prefix of the HTML to a
/// local output stream. Needs no credentials and performs no network I/O.
pub fn preview(html: &str, recipient: &str, out: &mut dyn Write) -> Result<()> {
    let prefix: String = html.chars().take(PREVIEW_CHARS).collect();
    writeln!(out, "Email generation successful!")?;
    writeln!(out, "Would send to: {}", recipient)?;
    writeln!(out, "\nPreview:")?;
    writeln!(out, "{}", prefix)?;
    Ok(())
}

/// Send the digest as a multipart MIME message over one authenticated SMTPS
/// session. Credentials are resolved before any network I/O; a transport
/// failure is logged and propagated fatally.
fn send_gmail(html: &str, recipient: &str, credentials: &dyn CredentialStore) -> Result<()> {
    let sender = require(credentials, GMAIL_ADDRESS)?;
    let password = require(credentials, GMAIL_APP_PASSWORD)?;

    let subject = format!("Research Digest - {}", Local::now().format("%Y-%m-%d"));
    let message = Message::builder()
        .from(sender.parse()?)
        .to(recipient.parse()?)
        .subject(subject)
        .multipart(
            MultiPart::alternative().singlepart(
                SinglePart::builder()
                    .header(ContentType::TEXT_HTML)
                    .body(html.to_string()),
            ),
        )?;

    // SMTPS session on port 465, matching Gmail's submission endpoint.
    let mailer = SmtpTransport::relay(SMTP_HOST)?
        .credentials(Credentials::new(sender, password))
        .build();

    match mailer.send(&message) {
        Ok(_) => {
            info!("Email sent successfully to {}", recipient);
            Ok(())
        }
        Err(e) => {
            error!("Failed to send email: {}", e);
            Err(e.into())
        }
    }
}
