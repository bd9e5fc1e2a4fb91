//! Environment-driven configuration, read once at startup.
//!
//! All credentials and endpoints live in the environment (a `.env` file is
//! honored if present). The whole surface is collected into one [`Config`]
//! that is constructed in `main` and passed down to collaborators, instead
//! of being read ad hoc at call sites.
//!
//! # Recognized variables
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `OPENAI_API_KEY` | yes | — |
//! | `OPENAI_BASE_URL` | no | `https://api.openai.com/v1` |
//! | `MODEL` | no | `gpt-5.2` |
//! | `SMTP_HOST` | for email | — |
//! | `SMTP_PORT` | no | `465` |
//! | `SMTP_USER` | for email | — |
//! | `SMTP_PASSWORD` | for email | — |
//! | `SMTP_SSL` | no | `true` (implicit TLS; `false` = STARTTLS) |
//! | `MAIL_FROM` | no | value of `SMTP_USER` |
//! | `MAIL_TO` | for email | — (comma-separated recipients) |

use crate::error::DigestError;
use std::env;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model provider credential, endpoint, and model identifier.
    pub llm: LlmConfig,
    /// SMTP settings; `None` when `SMTP_HOST` is unset (file-only runs).
    pub smtp: Option<SmtpConfig>,
}

/// Settings for the OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Settings for the SMTP digest sink.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Implicit TLS (SMTPS) when true, STARTTLS when false.
    pub use_ssl: bool,
    pub mail_from: String,
    /// Recipient addresses; each is delivered blind (Bcc).
    pub recipients: Vec<String>,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Loads a `.env` file from the working directory first if one exists.
    /// Missing required variables surface as [`DigestError::Config`].
    pub fn from_env() -> Result<Self, DigestError> {
        dotenvy::dotenv().ok();

        let llm = LlmConfig {
            api_key: require("OPENAI_API_KEY")?,
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: env::var("MODEL").unwrap_or_else(|_| "gpt-5.2".to_string()),
        };

        let smtp = match env::var("SMTP_HOST") {
            Ok(host) => {
                let user = require("SMTP_USER")?;
                let port = env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "465".to_string())
                    .parse::<u16>()
                    .map_err(|e| DigestError::Config(format!("SMTP_PORT: {e}")))?;
                Some(SmtpConfig {
                    host,
                    port,
                    password: require("SMTP_PASSWORD")?,
                    use_ssl: env::var("SMTP_SSL")
                        .map(|v| v.to_lowercase() == "true")
                        .unwrap_or(true),
                    mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| user.clone()),
                    recipients: parse_recipients(&require("MAIL_TO")?),
                    user,
                })
            }
            Err(_) => None,
        };

        Ok(Config { llm, smtp })
    }
}

fn require(name: &str) -> Result<String, DigestError> {
    env::var(name).map_err(|_| DigestError::Config(format!("{name} is not set")))
}

/// Split a comma-separated recipient list, trimming whitespace and
/// dropping empty entries.
fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
