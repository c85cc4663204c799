use crate::types::TranslationResponse;
use dioxus::prelude::*;

/// Translate `text` between two supported languages.
///
/// Logical failures (bad input, backend errors) come back as a normal reply
/// with a non-success `status`; only transport problems surface as `Err`.
#[dioxus::prelude::post("/translation")]
pub async fn translation(
    text: String,
    source_language: String,
    target_language: String,
) -> Result<TranslationResponse, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (text, source_language, target_language);
        Err(ServerFnError::new("translation is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use crate::types::TranslationRequest;

        let state = crate::state::AppState::global()
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        let request = TranslationRequest {
            text,
            source_language,
            target_language,
        };
        Ok(handle_translation(state.translator.as_ref(), request).await)
    }
}

#[cfg(feature = "server")]
pub(crate) async fn handle_translation(
    translator: &dyn crate::translator::Translator,
    request: crate::types::TranslationRequest,
) -> TranslationResponse {
    use crate::types::{is_supported_language, MAX_TEXT_CHARS};

    let text = request.text.trim();
    let (source, target) = (
        request.source_language.as_str(),
        request.target_language.as_str(),
    );

    if text.is_empty() {
        tracing::debug!("translation: rejected empty text");
        return TranslationResponse::error();
    }
    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        tracing::debug!("translation: rejected text of {} chars", chars);
        return TranslationResponse::error();
    }
    if !is_supported_language(source) || !is_supported_language(target) {
        tracing::debug!("translation: rejected language pair {}->{}", source, target);
        return TranslationResponse::error();
    }
    if source == target {
        return TranslationResponse::success(text);
    }

    match translator.translate(text, source, target).await {
        Ok(translated) => {
            tracing::debug!(
                "translation: {}->{} in={} out={}",
                source,
                target,
                chars,
                translated.chars().count()
            );
            TranslationResponse::success(translated)
        }
        Err(e) => {
            tracing::warn!("translation: {}->{} failed: {}", source, target, e);
            TranslationResponse::error()
        }
    }
}
