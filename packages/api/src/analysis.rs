use crate::types::CvAnalysis;
use dioxus::prelude::*;

/// Review an uploaded CV.
///
/// `content_base64` is the raw file, base64-encoded. Rejected uploads and
/// backend failures come back as `Err` carrying a user-facing message.
#[dioxus::prelude::post("/analyze")]
pub async fn analyze(filename: String, content_base64: String) -> Result<CvAnalysis, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (filename, content_base64);
        Err(ServerFnError::new("analyze is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use base64::Engine;

        let data = base64::engine::general_purpose::STANDARD
            .decode(content_base64.trim())
            .map_err(|_| ServerFnError::new("File content is not valid base64."))?;

        let state = crate::state::AppState::global()
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        handle_analysis(state.reviewer.as_ref(), &filename, &data)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }
}

#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Unsupported file type. Allowed: PDF, DOCX, TXT.")]
    UnsupportedType,
    #[error("File is too large. Max size is 5 MB.")]
    TooLarge,
    #[error(transparent)]
    Unreadable(#[from] crate::cv_text::ExtractError),
    #[error("CV text too short or empty.")]
    TooShort,
    #[error("CV analysis error: {0}")]
    Backend(#[from] crate::translator::BackendError),
}

#[cfg(feature = "server")]
pub(crate) async fn handle_analysis(
    reviewer: &dyn crate::translator::CvReviewer,
    filename: &str,
    data: &[u8],
) -> Result<CvAnalysis, AnalysisError> {
    use crate::cv_text::{extract_text, CvFormat};
    use crate::types::{MAX_CV_BYTES, MIN_CV_TEXT_CHARS};

    let filename = match filename.trim() {
        "" => "uploaded_file",
        name => name,
    };

    let format = CvFormat::from_filename(filename).ok_or(AnalysisError::UnsupportedType)?;
    if data.len() > MAX_CV_BYTES {
        tracing::debug!("analyze: rejected {} bytes", data.len());
        return Err(AnalysisError::TooLarge);
    }

    let text = extract_text(format, data)?;
    let text = text.trim();
    if text.chars().count() < MIN_CV_TEXT_CHARS {
        return Err(AnalysisError::TooShort);
    }

    match reviewer.review(text).await {
        Ok(analysis) => {
            tracing::debug!("analyze: {} reviewed, {} chars", filename, text.len());
            Ok(CvAnalysis::success(filename, analysis))
        }
        Err(e) => {
            tracing::warn!("analyze: {} failed: {}", filename, e);
            Err(e.into())
        }
    }
}
