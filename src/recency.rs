//! Recency filter for skipping stale or archival articles.
//!
//! A cheap, purely textual heuristic — no model call. Major newswires
//! (AP News, Reuters) print the publication date in long form
//! ("May 06, 2025") and flag rolling coverage with a literal "LIVE"
//! marker, so an article is considered current when either appears in
//! its text. Coarse and tied to those publishing conventions on purpose;
//! the point is to avoid spending a summarization call on yesterday's
//! story, not to be a general date parser.

use chrono::NaiveDate;

/// Newswire long-form date pattern: month name, zero-padded day, year.
const NEWSWIRE_DATE_FORMAT: &str = "%B %d, %Y";

/// Marker token for live/rolling coverage. Case-sensitive.
const LIVE_MARKER: &str = "LIVE";

/// Decide whether a document's text looks like same-day news.
///
/// Pure and deterministic for a given `today`: true iff the text contains
/// today's date rendered as e.g. `"May 06, 2025"`, or the literal token
/// `"LIVE"`. The placeholder text produced by a soft-failed fetch matches
/// neither, so blocked articles fall out here.
pub fn is_current(text: &str, today: NaiveDate) -> bool {
    let formatted = today.format(NEWSWIRE_DATE_FORMAT).to_string();
    text.contains(&formatted) || text.contains(LIVE_MARKER)
}
