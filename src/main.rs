//! # News Digest
//!
//! A daily news digest pipeline: fetch a news homepage, ask an LLM for the
//! 5–10 most important article URLs, fetch each article, keep the ones
//! carrying today's date (or a LIVE marker), summarize each into a
//! structured Chinese-language brief, and join the briefs into one dated
//! digest written to disk and optionally sent by email.
//!
//! ## Usage
//!
//! ```sh
//! news_digest                       # digest apnews.com into ./news_<date>.txt
//! news_digest -o ./digests --email  # also deliver by SMTP
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetch**: Download the homepage and normalize it to text
//! 2. **Extract**: Ask the LLM for candidate article URLs (strict JSON contract)
//! 3. **Process**: Per URL, fetch → recency filter → summarize, in parallel
//!    with per-article failure isolation
//! 4. **Deliver**: Write the joined digest to a file and/or email it
//!
//! Failures while processing one article never abort the others; a failed
//! extraction stage or an undeliverable digest fail the whole run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod recency;
mod summarize;
mod utils;

use api::OpenAiClient;
use cli::Cli;
use config::Config;
use fetch::PageFetcher;
use outputs::{digest, mail};
use pipeline::Pipeline;
use utils::ensure_writable_dir;

#[instrument]
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_digest starting up");

    let args = Cli::parse();
    debug!(?args.homepage_url, ?args.output_dir, args.email, args.concurrency, "Parsed CLI arguments");

    let config = Config::from_env()?;
    if args.email && config.smtp.is_none() {
        error!("--email requested but SMTP_HOST is not configured");
        return Err(Box::new(error::DigestError::Config(
            "--email requires SMTP_* environment variables".to_string(),
        )));
    }

    // Early check: ensure the output dir is writable before spending model calls
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(Box::new(e));
    }

    // Build the mailer up front too, so a bad address fails fast
    let mailer = if args.email {
        // unwrap checked above
        Some(mail::DigestMailer::new(config.smtp.as_ref().unwrap())?)
    } else {
        None
    };

    // ---- Run the pipeline ----
    let fetcher = PageFetcher::new()?;
    let llm = OpenAiClient::new(config.llm.clone());
    let pipeline = Pipeline::new(fetcher, llm, args.concurrency);

    let result = pipeline.run(args.homepage_url.as_str()).await?;
    info!(
        date = %result.date,
        briefs = result.briefs.len(),
        "Digest computed"
    );
    if result.briefs.is_empty() {
        warn!("No current articles survived filtering; digest will be empty");
    }

    // ---- Deliver ----
    // From here on the digest exists; a failure below means "computed but
    // undelivered", not "computation failed".
    let rendered = digest::render(&result);

    let path = match digest::write_digest(&result, &args.output_dir).await {
        Ok(path) => path,
        Err(e) => {
            error!(error = %e, "Digest computed but could not be written to disk");
            return Err(Box::new(e));
        }
    };
    info!(%path, "Digest written");

    if let Some(mailer) = mailer {
        let subject = digest::header(&result);
        if let Err(e) = mailer.send(&subject, &rendered).await {
            error!(error = %e, "Digest computed and written, but email delivery failed");
            return Err(Box::new(e));
        }
        info!("Digest emailed");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        briefs = result.briefs.len(),
        "Execution complete"
    );

    Ok(())
}
