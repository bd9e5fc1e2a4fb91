//! Digest rendering and file output.
//!
//! The digest text format is fixed:
//!
//! ```text
//! Daily digest - 2025-05-06
//! ========================================
//!
//! <brief>
//!
//! ----------------------------------------
//!
//! <brief>
//! ```
//!
//! Files land at `<output_dir>/news_<date>.txt`.

use crate::error::DigestError;
use crate::models::Digest;
use tokio::fs;
use tracing::{info, instrument};

const RULE_WIDTH: usize = 40;

/// Render a digest to its fixed text format.
pub fn render(digest: &Digest) -> String {
    let separator = format!("\n\n{}\n\n", "-".repeat(RULE_WIDTH));
    let body = digest
        .briefs
        .iter()
        .map(|brief| brief.summary.as_str())
        .collect::<Vec<_>>()
        .join(&separator);

    format!(
        "{}\n{}\n\n{}\n",
        header(digest),
        "=".repeat(RULE_WIDTH),
        body
    )
}

/// The digest's date-stamped header, also used as the email subject.
pub fn header(digest: &Digest) -> String {
    format!("Daily digest - {}", digest.date)
}

/// Write the rendered digest to `<output_dir>/news_<date>.txt`.
///
/// Returns the path written to.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_digest(digest: &Digest, output_dir: &str) -> Result<String, DigestError> {
    let path = format!(
        "{}/news_{}.txt",
        output_dir.trim_end_matches('/'),
        digest.date
    );
    fs::write(&path, render(digest)).await?;
    info!(%path, briefs = digest.briefs.len(), "Wrote digest file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Brief;
    use chrono::NaiveDate;

    fn sample_digest() -> Digest {
        Digest {
            date: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            briefs: vec![
                Brief {
                    source_url: "https://example.com/a".to_string(),
                    summary: "Brief-A".to_string(),
                },
                Brief {
                    source_url: "https://example.com/b".to_string(),
                    summary: "Brief-B".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_render_header_and_rule() {
        let text = render(&sample_digest());
        assert!(text.starts_with("Daily digest - 2025-05-06\n"));
        assert!(text.contains(&"=".repeat(40)));
    }

    #[test]
    fn test_render_separator_between_entries() {
        let text = render(&sample_digest());
        let expected = format!("Brief-A\n\n{}\n\nBrief-B", "-".repeat(40));
        assert!(text.contains(&expected));
        assert!(text.ends_with("Brief-B\n"));
    }

    #[test]
    fn test_render_empty_digest_still_has_header() {
        let digest = Digest {
            date: NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            briefs: vec![],
        };
        let text = render(&digest);
        assert!(text.starts_with("Daily digest - 2025-05-06\n"));
        assert!(!text.contains("----"));
    }

    #[test]
    fn test_header_is_date_stamped() {
        assert_eq!(header(&sample_digest()), "Daily digest - 2025-05-06");
    }

    #[tokio::test]
    async fn test_write_digest_names_file_by_date() {
        let dir = std::env::temp_dir().join("news_digest_output_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = write_digest(&sample_digest(), dir.to_str().unwrap())
            .await
            .unwrap();
        assert!(path.ends_with("news_2025-05-06.txt"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Brief-A"));
        assert!(written.contains("Brief-B"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
