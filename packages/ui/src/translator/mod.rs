//! Translator form state and the translate round trip.

use std::fmt::Display;
use std::future::Future;

use api::types::{TranslationRequest, TranslationResponse, MAX_TEXT_CHARS};
use dioxus::logger::tracing;

mod page;
pub use page::TranslatorPage;

pub const TRANSLATION_FAILED: &str = "Translation failed.";
pub const SERVER_ERROR: &str = "Server error. Try again.";

pub const DEFAULT_SOURCE: &str = "en";
pub const DEFAULT_TARGET: &str = "ru";

/// `"L/5000"` with L in characters, capped at the limit.
pub fn char_counter(text: &str) -> String {
    let len = text.chars().count().min(MAX_TEXT_CHARS);
    format!("{len}/{MAX_TEXT_CHARS}")
}

/// Input was empty after trimming; no request must be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorForm {
    pub source_language: String,
    pub target_language: String,
    pub input: String,
    pub output: String,
    pub loading: bool,
}

impl Default for TranslatorForm {
    fn default() -> Self {
        Self {
            source_language: DEFAULT_SOURCE.to_string(),
            target_language: DEFAULT_TARGET.to_string(),
            input: String::new(),
            output: String::new(),
            loading: false,
        }
    }
}

impl TranslatorForm {
    pub fn input_counter(&self) -> String {
        char_counter(&self.input)
    }

    pub fn output_counter(&self) -> String {
        char_counter(&self.output)
    }

    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub fn set_output(&mut self, text: String) {
        self.output = text;
    }

    /// Exchange both language selections and both text areas.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.input, &mut self.output);
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    /// Validate the input and, if there is something to send, enter the
    /// loading state and return the request.
    pub fn begin_translate(&mut self) -> Result<TranslationRequest, EmptyInput> {
        let text = self.input.trim();
        if text.is_empty() {
            return Err(EmptyInput);
        }

        self.loading = true;
        Ok(TranslationRequest {
            text: text.to_string(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
        })
    }

    /// Show the outcome of a request and leave the loading state, whatever
    /// the outcome was.
    pub fn finish_translate<E: Display>(&mut self, result: Result<TranslationResponse, E>) {
        self.output = match result {
            Ok(resp) if resp.is_success() => resp.translated_text,
            Ok(resp) => {
                tracing::debug!("translation rejected with status {:?}", resp.status);
                TRANSLATION_FAILED.to_string()
            }
            Err(e) => {
                tracing::error!("translation request failed: {e}");
                SERVER_ERROR.to_string()
            }
        };
        self.loading = false;
    }
}

/// Full translate cycle against any sender. Returns `Err(EmptyInput)` without
/// calling `send` when there is nothing to translate.
pub async fn translate_with<F, Fut, E>(form: &mut TranslatorForm, send: F) -> Result<(), EmptyInput>
where
    F: FnOnce(TranslationRequest) -> Fut,
    Fut: Future<Output = Result<TranslationResponse, E>>,
    E: Display,
{
    let request = form.begin_translate()?;
    let result = send(request).await;
    form.finish_translate(result);
    Ok(())
}
