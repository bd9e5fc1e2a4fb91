//! Data models for the digest pipeline.
//!
//! The pipeline is pure dataflow: each value is constructed once and never
//! mutated afterwards.
//!
//! - [`Document`]: a fetched page normalized to text
//! - [`Brief`]: one article's model-generated summary
//! - [`Digest`]: the joined briefs for one run, keyed by calendar date

use chrono::{DateTime, Local, NaiveDate};

/// A fetched web page normalized to plain text.
///
/// Produced by the fetcher, consumed by the extractor, the recency filter,
/// and the summarizer. When a fetch returns a non-200 status the `text`
/// holds a placeholder error string instead of page content; downstream
/// stages tolerate that and simply produce nothing from it.
#[derive(Debug, Clone)]
pub struct Document {
    /// The URL the page was fetched from.
    pub source_url: String,
    /// The page body converted to text (links preserved as footnotes).
    pub text: String,
    /// When the fetch completed.
    pub fetched_at: DateTime<Local>,
}

/// One article's summary as returned by the model.
///
/// The summary text is the raw completion, kept unconditionally; the
/// template (source, importance, title, key points) is enforced at the
/// prompt level, not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brief {
    /// The article URL this brief was produced from.
    pub source_url: String,
    /// The model's formatted summary text.
    pub summary: String,
}

/// The joined collection of briefs for one run.
///
/// Brief order reflects completion order of the concurrent units, not
/// submission order. Each brief names its own source, so the digest is an
/// unordered bag rendered as ordered text only incidentally.
#[derive(Debug)]
pub struct Digest {
    /// The calendar date of the run.
    pub date: NaiveDate,
    /// All briefs produced by this run.
    pub briefs: Vec<Brief>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document {
            source_url: "https://example.com".to_string(),
            text: "Test content".to_string(),
            fetched_at: Local::now(),
        };
        assert_eq!(doc.source_url, "https://example.com");
        assert_eq!(doc.text, "Test content");
    }

    #[test]
    fn test_brief_equality() {
        let a = Brief {
            source_url: "https://example.com/a".to_string(),
            summary: "Brief-A".to_string(),
        };
        let b = Brief {
            source_url: "https://example.com/a".to_string(),
            summary: "Brief-A".to_string(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_digest() {
        let digest = Digest {
            date: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            briefs: vec![],
        };
        assert_eq!(digest.briefs.len(), 0);
        assert_eq!(digest.date.to_string(), "2025-05-06");
    }
}
