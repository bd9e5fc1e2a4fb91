//! Error taxonomy for the digest pipeline.
//!
//! The pipeline deliberately keeps a two-tier failure policy:
//!
//! - A non-200 article fetch is **not** an error at all. It degrades into
//!   placeholder document text (`"Error fetching webpage: <code>"`) which
//!   the recency filter rejects, so the article simply contributes no brief.
//! - A malformed URL-extraction response **is** fatal: with no candidate
//!   URLs there is nothing to schedule, so [`DigestError::MalformedModelOutput`]
//!   is surfaced to the caller distinctly from transport errors.
//!
//! Failures inside one article's fetch/filter/summarize chain are caught at
//! the unit boundary in the orchestrator and never abort sibling units.

use thiserror::Error;

/// All the ways a digest run can fail.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Transport-level HTTP failure (DNS, TLS, connect, body read).
    ///
    /// Fatal when it hits the homepage fetch; recovered per-unit inside
    /// the article fan-out.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The LLM endpoint answered with a non-success status.
    #[error("model API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The LLM endpoint answered 200 but with no completion choices.
    #[error("model returned an empty completion")]
    EmptyCompletion,

    /// The URL-extraction response could not be read as a JSON array of
    /// strings. Fatal to the run: no candidate URLs means no work.
    #[error("malformed model output ({reason}): {raw}")]
    MalformedModelOutput { reason: String, raw: String },

    /// A required environment variable is missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A sender or recipient address did not parse as a mailbox.
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The digest email could not be assembled.
    #[error("failed to build email: {0}")]
    Mail(#[from] lettre::error::Error),

    /// SMTP delivery failed after the digest was computed.
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Writing the digest file failed after the digest was computed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
