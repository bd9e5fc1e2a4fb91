//! SMTP delivery of the rendered digest.
//!
//! Recipients are addressed exclusively via Bcc so they stay hidden from
//! one another (blind distribution). `SMTP_SSL=true` (the default) uses
//! implicit TLS on the configured port; `false` switches to STARTTLS.

use crate::config::SmtpConfig;
use crate::error::DigestError;
use lettre::message::{Mailbox, Message, header};
use lettre::transport::smtp::AsyncSmtpTransport;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncTransport, Tokio1Executor};
use tracing::{info, instrument};

/// Sends rendered digests over one configured SMTP relay.
pub struct DigestMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipients: Vec<Mailbox>,
}

impl DigestMailer {
    /// Build the mailer from SMTP configuration.
    ///
    /// Address parsing and relay setup failures surface here, before any
    /// digest work is spent.
    pub fn new(config: &SmtpConfig) -> Result<Self, DigestError> {
        let creds = Credentials::new(config.user.clone(), config.password.clone());

        let builder = if config.use_ssl {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };
        let mailer = builder.port(config.port).credentials(creds).build();

        let from: Mailbox = config.mail_from.parse()?;
        let recipients = config
            .recipients
            .iter()
            .map(|addr| addr.parse::<Mailbox>())
            .collect::<Result<Vec<_>, _>>()?;
        if recipients.is_empty() {
            return Err(DigestError::Config("MAIL_TO has no recipients".to_string()));
        }

        Ok(Self {
            mailer,
            from,
            recipients,
        })
    }

    /// Send the digest text to every configured recipient, blind.
    #[instrument(level = "info", skip_all, fields(subject = %subject))]
    pub async fn send(&self, subject: &str, body: &str) -> Result<(), DigestError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN);
        for recipient in &self.recipients {
            builder = builder.bcc(recipient.clone());
        }
        let message = builder.body(body.to_string())?;

        self.mailer.send(message).await?;
        info!(recipients = self.recipients.len(), "Digest email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 465,
            user: "sender@example.com".to_string(),
            password: "secret".to_string(),
            use_ssl: true,
            mail_from: "sender@example.com".to_string(),
            recipients: vec![
                "a@example.com".to_string(),
                "b@example.com".to_string(),
            ],
        }
    }

    #[test]
    fn test_mailer_builds_from_valid_config() {
        let mailer = DigestMailer::new(&sample_config()).unwrap();
        assert_eq!(mailer.recipients.len(), 2);
    }

    #[test]
    fn test_mailer_rejects_invalid_from_address() {
        let mut config = sample_config();
        config.mail_from = "not an address".to_string();
        assert!(matches!(
            DigestMailer::new(&config),
            Err(DigestError::Address(_))
        ));
    }

    #[test]
    fn test_mailer_rejects_empty_recipient_list() {
        let mut config = sample_config();
        config.recipients.clear();
        assert!(matches!(
            DigestMailer::new(&config),
            Err(DigestError::Config(_))
        ));
    }

    #[test]
    fn test_starttls_config_builds() {
        let mut config = sample_config();
        config.use_ssl = false;
        config.port = 587;
        assert!(DigestMailer::new(&config).is_ok());
    }
}
