use super::{BackendError, CvReviewer, Translator};
use async_trait::async_trait;

/// Local-mode translator: tags the text with the target language so the whole
/// round trip can be exercised without network access.
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, BackendError> {
        tracing::debug!(
            "translator.echo: {}->{} len={}",
            source_language,
            target_language,
            text.len()
        );
        Ok(format!("[{target_language}] {text}"))
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}

/// Local-mode reviewer: a fixed-shape report that only reflects the input size.
#[async_trait]
impl CvReviewer for EchoTranslator {
    async fn review(&self, cv_text: &str) -> Result<String, BackendError> {
        let chars = cv_text.chars().count();
        tracing::debug!("reviewer.echo: len={}", chars);
        Ok(format!(
            "1) Overall score: n/a (local mode)\n2) Reviewed {chars} characters."
        ))
    }
}
