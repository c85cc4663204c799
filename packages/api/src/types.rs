use serde::{Deserialize, Serialize};

/// Upper bound on translatable input, in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// The only `status` value that counts as a successful translation.
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Language codes offered by the translator form and accepted by `/translation`.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ru", "Русский"),
    ("kk", "Қазақша"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("tr", "Türkçe"),
    ("zh", "中文"),
];

pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Body of a `/translation` reply. Only `status` and `translated_text` are
/// part of the contract; failures may omit the text entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub status: String,
    #[serde(default)]
    pub translated_text: String,
}

impl TranslationResponse {
    pub fn success(translated_text: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            translated_text: translated_text.into(),
        }
    }

    pub fn error() -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            translated_text: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Largest CV upload accepted by `/analyze`, in bytes.
pub const MAX_CV_BYTES: usize = 5 * 1024 * 1024;

/// Extracted CV text shorter than this (after trimming) is not worth reviewing.
pub const MIN_CV_TEXT_CHARS: usize = 100;

/// Lower-case file extensions `/analyze` can extract text from.
pub const CV_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Reply of a successful `/analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub status: String,
    pub filename: String,
    pub analysis: String,
}

impl CvAnalysis {
    pub fn success(filename: impl Into<String>, analysis: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            filename: filename.into(),
            analysis: analysis.into(),
        }
    }
}
