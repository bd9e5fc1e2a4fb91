//! Digest sinks.
//!
//! The pipeline computes one [`crate::models::Digest`] per run; these
//! submodules deliver it:
//!
//! - [`digest`]: render the digest as UTF-8 text and write it to disk
//! - [`mail`]: send the same text by SMTP to a blind recipient list
//!
//! Sink failures are surfaced to the caller as run failures. They are
//! distinguishable from computation failures: the digest was computed but
//! not delivered.

pub mod digest;
pub mod mail;
