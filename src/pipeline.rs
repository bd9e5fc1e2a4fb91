//! The extract → filter → summarize pipeline orchestrator.
//!
//! Two strictly sequential prerequisites run first: fetch the homepage,
//! then extract candidate article URLs. A malformed extraction response
//! fails the run here, before any article work is dispatched.
//!
//! After that, one independent unit of work runs per candidate URL
//! (fetch article → recency filter → summarize), fanned out over a
//! bounded `buffer_unordered` pool. Units share no mutable state and are
//! fully isolated: an error anywhere in one unit's chain is caught at the
//! unit boundary, logged, and contributes no brief — it never aborts
//! sibling units or the aggregate result (gather-with-settled-results,
//! not fail-fast). Completed briefs are joined in completion order into
//! one dated [`Digest`].

use crate::api::AskAsync;
use crate::error::DigestError;
use crate::extract;
use crate::fetch::FetchPage;
use crate::models::{Brief, Digest};
use crate::recency;
use crate::summarize;
use chrono::{Local, NaiveDate};
use futures::stream::{self, StreamExt};
use tracing::{debug, error, info, instrument};

/// Composes the fetcher and LLM client into one digest run.
pub struct Pipeline<F, A> {
    fetcher: F,
    llm: A,
    concurrency: usize,
}

impl<F, A> Pipeline<F, A>
where
    F: FetchPage,
    A: AskAsync,
{
    pub fn new(fetcher: F, llm: A, concurrency: usize) -> Self {
        Self {
            fetcher,
            llm,
            // A zero-width pool would deadlock buffer_unordered
            concurrency: concurrency.max(1),
        }
    }

    /// Run the full pipeline against one homepage URL.
    ///
    /// # Errors
    ///
    /// Fails when the homepage cannot be fetched at the transport level or
    /// when the URL extraction response is malformed. Per-article failures
    /// never surface here; they are logged and dropped at the unit
    /// boundary.
    #[instrument(level = "info", skip_all, fields(%homepage_url))]
    pub async fn run(&self, homepage_url: &str) -> Result<Digest, DigestError> {
        let homepage = self.fetcher.fetch(homepage_url).await?;
        let urls = extract::extract_news_urls(&self.llm, &homepage).await?;

        let today = Local::now().date_naive();
        let total = urls.len();
        info!(
            candidates = total,
            concurrency = self.concurrency,
            "Starting parallel article processing"
        );

        let briefs: Vec<Brief> = stream::iter(urls)
            .map(|url| async move {
                match self.process_article(&url, today).await {
                    Ok(Some(brief)) => {
                        info!(url = %brief.source_url, "Produced brief");
                        Some(brief)
                    }
                    Ok(None) => {
                        debug!(%url, "Skipping article without current-date marker");
                        None
                    }
                    Err(e) => {
                        error!(%url, error = %e, "Failed to process article");
                        None
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .filter_map(std::future::ready)
            .collect()
            .await;

        info!(
            total,
            briefs = briefs.len(),
            skipped_or_failed = total - briefs.len(),
            "Completed parallel article processing"
        );

        Ok(Digest {
            date: today,
            briefs,
        })
    }

    /// One isolated unit of work: fetch, filter, summarize.
    ///
    /// `Ok(None)` means the article was filtered as stale; errors are the
    /// caller's to contain.
    async fn process_article(
        &self,
        url: &str,
        today: NaiveDate,
    ) -> Result<Option<Brief>, DigestError> {
        let document = self.fetcher.fetch(url).await?;
        if !recency::is_current(&document.text, today) {
            debug!(
                %url,
                fetched_at = %document.fetched_at,
                "No current-date marker in article text"
            );
            return Ok(None);
        }
        let brief = summarize::summarize(&self.llm, &document).await?;
        Ok(Some(brief))
    }
}
