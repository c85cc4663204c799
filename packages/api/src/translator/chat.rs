use super::{BackendError, CvReviewer, Translator};
use crate::types::language_name;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_PROMPT: &str = "\
You are a professional translator.

Rules:
- Translate the user's text from the source language into the target language.
- Keep the meaning, tone, line breaks and formatting of the original.
- Do not add explanations, notes, quotes or transliterations.
- Output ONLY the translated text.";

const REVIEW_PROMPT: &str = "\
You are an experienced HR specialist and CV reviewer.

Your job:
- Analyze the candidate's CV text.
- Give a score from 0 to 10.
- Provide clear, practical, and kind feedback.
- Output structure:
1) Overall score
2) Strengths
3) Weaknesses
4) Suggestions and example improvements.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat completion backend (production)
pub struct ChatTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl ChatTranslator {
    pub fn new(
        api_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build translation HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_url)
    }

    /// One chat completion round trip; returns the first choice's text.
    async fn complete(&self, body: &ChatRequest<'_>) -> Result<String, BackendError> {
        let api_key = self.api_key.as_deref().ok_or(BackendError::MissingApiKey)?;

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        extract_text(response.json::<ChatResponse>().await?)
    }
}

fn user_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    let source = language_name(source_language).unwrap_or(source_language);
    let target = language_name(target_language).unwrap_or(target_language);
    format!(
        "Source language: {source} ({source_language}).\n\
         Target language: {target} ({target_language}).\n\n\
         Text:\n{text}"
    )
}

fn build_request<'a>(
    model: &'a str,
    text: &str,
    source_language: &str,
    target_language: &str,
) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: user_prompt(text, source_language, target_language),
            },
        ],
        temperature: Some(0.2),
    }
}

fn build_review_request<'a>(model: &'a str, cv_text: &str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: REVIEW_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: format!(
                    "Here is the CV text:\n\n{cv_text}\n\n\
                     Analyze this CV according to the system instructions."
                ),
            },
        ],
        temperature: None,
    }
}

fn extract_text(resp: ChatResponse) -> Result<String, BackendError> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(BackendError::EmptyCompletion)
}

#[async_trait]
impl Translator for ChatTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, BackendError> {
        tracing::debug!(
            "translator.chat: model={} {}->{} len={}",
            self.model,
            source_language,
            target_language,
            text.len()
        );

        let body = build_request(&self.model, text, source_language, target_language);
        self.complete(&body).await
    }

    fn name(&self) -> &'static str {
        "chat"
    }
}

#[async_trait]
impl CvReviewer for ChatTranslator {
    async fn review(&self, cv_text: &str) -> Result<String, BackendError> {
        tracing::debug!("reviewer.chat: model={} len={}", self.model, cv_text.len());
        let body = build_review_request(&self.model, cv_text);
        self.complete(&body).await
    }
}
