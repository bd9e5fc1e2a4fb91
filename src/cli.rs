//! Command-line interface definitions for the daily news digest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials (model provider, SMTP) are environment-only and live in
//! [`crate::config`]; the CLI covers the per-run knobs.

use clap::Parser;
use url::Url;

/// Command-line arguments for the news digest application.
///
/// # Examples
///
/// ```sh
/// # Digest today's AP News front page into ./news_<date>.txt
/// news_digest
///
/// # A different portal, written elsewhere, then emailed
/// news_digest -u https://www.reuters.com/ -o ./digests --email
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News homepage to pull candidate article links from
    #[arg(short = 'u', long, default_value = "https://apnews.com/")]
    pub homepage_url: Url,

    /// Output directory for the digest text file
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Also send the digest by email (requires SMTP_* environment variables)
    #[arg(long)]
    pub email: bool,

    /// How many articles to fetch and summarize in parallel
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["news_digest"]);
        assert_eq!(cli.homepage_url.as_str(), "https://apnews.com/");
        assert_eq!(cli.output_dir, ".");
        assert!(!cli.email);
        assert_eq!(cli.concurrency, 8);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "news_digest",
            "-u",
            "https://www.reuters.com/",
            "--output-dir",
            "/tmp/digests",
            "--email",
            "--concurrency",
            "4",
        ]);
        assert_eq!(cli.homepage_url.as_str(), "https://www.reuters.com/");
        assert_eq!(cli.output_dir, "/tmp/digests");
        assert!(cli.email);
        assert_eq!(cli.concurrency, 4);
    }

    #[test]
    fn test_cli_rejects_invalid_homepage_url() {
        let result = Cli::try_parse_from(["news_digest", "-u", "not a url"]);
        assert!(result.is_err());
    }
}
