//! LLM API interaction.
//!
//! This module talks to an OpenAI-compatible chat completion endpoint.
//! Each call is stateless and independent: one system instruction plus one
//! user text blob in, one completion out. No streaming, no multi-turn
//! state, and deliberately no retry layer — a failed call is a failed call
//! and the caller decides what that means for the run.
//!
//! # Architecture
//!
//! The module uses a trait-based design for flexibility:
//! - [`AskAsync`]: core trait defining async LLM interaction
//! - [`OpenAiClient`]: implementation over `reqwest` against the
//!   configured endpoint
//!
//! Tests substitute their own [`AskAsync`] implementations to run the
//! pipeline against canned completions.

use crate::config::LlmConfig;
use crate::error::DigestError;
use crate::utils::truncate_for_log;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Trait for async LLM interaction.
///
/// Implementors send a system instruction plus a single user input to a
/// language model and return the raw completion text.
pub trait AskAsync {
    /// Send text to the LLM and receive the completion.
    ///
    /// `json_output` asks the endpoint to constrain the completion to a
    /// JSON value (used by the URL extraction stage).
    async fn ask(
        &self,
        system_prompt: &str,
        input: &str,
        json_output: bool,
    ) -> Result<String, DigestError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Chat completion client for an OpenAI-compatible endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl AskAsync for OpenAiClient {
    #[instrument(level = "info", skip_all, fields(model = %self.config.model, json_output))]
    async fn ask(
        &self,
        system_prompt: &str,
        input: &str,
        json_output: bool,
    ) -> Result<String, DigestError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: input,
                },
            ],
            temperature: 0.0,
            response_format: json_output.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let t0 = Instant::now();
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Model API call failed"
            );
            return Err(DigestError::Api {
                status: status.as_u16(),
                body: truncate_for_log(&body, 300),
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(DigestError::EmptyCompletion)?;

        info!(
            elapsed_ms = t0.elapsed().as_millis() as u64,
            response_bytes = content.len(),
            "Model API call succeeded"
        );
        Ok(content)
    }
}
