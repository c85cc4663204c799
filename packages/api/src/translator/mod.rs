//! Language-model backends: text translation and CV review share one client.

use async_trait::async_trait;
use thiserror::Error;

pub mod chat;
pub mod echo;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("language model backend has no API key configured")]
    MissingApiKey,
    #[error("language model request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("language model returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("language model returned no text")]
    EmptyCompletion,
}

/// Trait for translation backend implementations
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, BackendError>;

    /// Short label for startup logs.
    fn name(&self) -> &'static str;
}

/// Scores a CV and returns free-form feedback.
#[async_trait]
pub trait CvReviewer: Send + Sync {
    async fn review(&self, cv_text: &str) -> Result<String, BackendError>;
}
