//! Article summarization into a structured Chinese-language brief.
//!
//! The system instruction fixes the whole output template — source and
//! URL, an importance score on an explicit 1–5 rubric, a concise title, a
//! bounded abstract, a bulleted key-point list — and binds the model to
//! strict factual grounding (nothing beyond the given text) and strict
//! neutrality (no opinion injection). Those behavioral requirements live
//! in the prompt, not in code: the raw completion is returned as-is and
//! becomes the brief content unconditionally, with no retry and no
//! format validation.

use crate::api::AskAsync;
use crate::error::DigestError;
use crate::models::{Brief, Document};
use tracing::{debug, instrument};

/// System instruction for the summarization stage.
pub const NEWS_EDITOR_PROMPT: &str = r#"# 身份: 资深客观新闻聚合/编辑机器人

你是一个专业、高效、中立的资深新闻编辑机器人。你的主要任务是调用工具获取国外新闻，翻译到中文并进行客观、简洁的总结。你不表达个人观点，只陈述事实。

## 严格遵守:
1. **绝对客观**：保持中立态度，只陈述事实，**绝不**在总结中加入你的个人观点、评价或情感倾向。
2. **杜绝幻觉**：只基于用户提供的文本内容进行总结。如果提供的信息不完整，不要自行脑补或编造细节。

## 输入格式:
你将收到一个转换为markdown格式的网页内容。

## 输出格式:
请严格按照以下结构输出你的总结：

**来源**: [新闻来源，如CNN、BBC] [网页URL]
**重要程度**: [用1-5的数字评估这条新闻于世界的重要程度，5为最重要]
**标题**：[生成一个精炼的客观标题]
**核心摘要**：[200字以内概括这篇新闻最重要的事情]
**关键要点**：
 - [要点 1：如具体数据、重要决定等]
 - [要点 2：如相关方的回应、背景等]
 - [要点 3：如后续影响、未来规划等]
 - [按需添加更多要点，每个要点100字以内]
"#;

/// Summarize one article document into a [`Brief`].
#[instrument(level = "info", skip_all, fields(url = %document.source_url))]
pub async fn summarize<A: AskAsync>(
    llm: &A,
    document: &Document,
) -> Result<Brief, DigestError> {
    let summary = llm.ask(NEWS_EDITOR_PROMPT, &document.text, false).await?;
    debug!(summary_bytes = summary.len(), "Summarized article");
    Ok(Brief {
        source_url: document.source_url.clone(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    struct FixedLlm(&'static str);

    impl AskAsync for FixedLlm {
        async fn ask(
            &self,
            _system_prompt: &str,
            _input: &str,
            _json_output: bool,
        ) -> Result<String, DigestError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_summary_is_kept_verbatim() {
        let llm = FixedLlm("**来源**: AP News https://example.com/a\n**标题**：测试");
        let doc = Document {
            source_url: "https://example.com/a".to_string(),
            text: "article text".to_string(),
            fetched_at: Local::now(),
        };
        let brief = summarize(&llm, &doc).await.unwrap();
        assert_eq!(brief.source_url, "https://example.com/a");
        assert_eq!(brief.summary, llm.0);
    }

    #[test]
    fn test_prompt_fixes_template_and_rubric() {
        assert!(NEWS_EDITOR_PROMPT.contains("重要程度"));
        assert!(NEWS_EDITOR_PROMPT.contains("1-5"));
        assert!(NEWS_EDITOR_PROMPT.contains("绝对客观"));
        assert!(NEWS_EDITOR_PROMPT.contains("杜绝幻觉"));
    }
}
