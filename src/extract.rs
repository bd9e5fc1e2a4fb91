//! Candidate URL extraction from a news homepage.
//!
//! The homepage document text is handed to the model with a system
//! instruction fixing the selection count (the 5–10 most important
//! stories), the exclusion of navigational links, and a strict
//! JSON-array-of-strings output contract.
//!
//! The model's raw output is parsed explicitly — never cast. Anything
//! that is not valid JSON, not an array, or not an array of strings
//! fails the run with [`DigestError::MalformedModelOutput`]: a broken
//! extraction stage means zero downstream work gets scheduled, so it has
//! to fail loudly and distinctly from a transport error.

use crate::api::AskAsync;
use crate::error::DigestError;
use crate::models::Document;
use crate::utils::truncate_for_log;
use tracing::{debug, info, instrument};

/// System instruction for the URL extraction stage.
pub const URL_EXTRACTOR_PROMPT: &str = r#"# 身份: 新闻内容获取机器人

你是一个专业、高效的新闻内容获取机器人。你的主要任务是提取用户提供网页中的新闻URL，选取最重要的5-10条新闻链接。
严格遵守：确保提取的URL是有效的新闻链接，避免提取无关的链接。

## 输入格式:
你将收到一个转换为markdown格式的网页内容。

## 输出格式:
请严格按照json数组格式输出提取的新闻URL列表：

[
    "https://example.com/news1",
    "https://example.com/news2",
    ...
]
"#;

/// Ask the model for candidate article URLs from a homepage document.
///
/// # Errors
///
/// [`DigestError::MalformedModelOutput`] when the completion cannot be
/// read as a JSON array of strings; transport/API errors pass through.
#[instrument(level = "info", skip_all, fields(homepage = %homepage.source_url))]
pub async fn extract_news_urls<A: AskAsync>(
    llm: &A,
    homepage: &Document,
) -> Result<Vec<String>, DigestError> {
    let raw = llm.ask(URL_EXTRACTOR_PROMPT, &homepage.text, true).await?;
    let urls = parse_url_list(&raw)?;
    info!(count = urls.len(), "Extracted candidate article URLs");
    debug!(?urls, "Candidate URLs");
    Ok(urls)
}

/// Parse the model's completion as a strict JSON array of strings.
fn parse_url_list(raw: &str) -> Result<Vec<String>, DigestError> {
    let malformed = |reason: String| DigestError::MalformedModelOutput {
        reason,
        raw: truncate_for_log(raw, 300),
    };

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| malformed(format!("not valid JSON: {e}")))?;

    let items = value
        .as_array()
        .ok_or_else(|| malformed("not a JSON array".to_string()))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(format!("array element is not a string: {item}")))
        })
        .collect()
}
