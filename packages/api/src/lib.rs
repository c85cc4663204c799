//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod types;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod translator;

#[cfg(feature = "server")]
pub mod cv_text;

mod analysis;
mod translation;



/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use analysis::analyze;
pub use translation::translation;
pub use types::{CvAnalysis, TranslationRequest, TranslationResponse};
