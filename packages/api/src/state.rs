use crate::config::{AppConfig, AppMode, TranslatorConfig};
use crate::translator::{chat::ChatTranslator, echo::EchoTranslator, CvReviewer, Translator};
use anyhow::Result;
use std::sync::{Arc, OnceLock};

/// Global application state containing all service implementations
pub struct AppState {
    pub translator: Arc<dyn Translator>,
    pub reviewer: Arc<dyn CvReviewer>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("translator", &self.translator.name())
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Create AppState from configuration
    pub fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let (translator, reviewer): (Arc<dyn Translator>, Arc<dyn CvReviewer>) = match &config
            .translator
        {
            TranslatorConfig::Chat {
                api_url,
                api_key,
                model,
                timeout,
            } => {
                if api_key.is_none() {
                    tracing::warn!(
                        "OPENAI_API_KEY is not set; /translation and /analyze will fail"
                    );
                }
                tracing::info!("   Translator: chat ({} @ {})", model, api_url);
                let chat = Arc::new(ChatTranslator::new(api_url, api_key.clone(), model, *timeout)?);
                let translator: Arc<dyn Translator> = chat.clone();
                let reviewer: Arc<dyn CvReviewer> = chat;
                (translator, reviewer)
            }
            TranslatorConfig::Echo => {
                tracing::info!("   Translator: echo (local mode, no network)");
                let echo = Arc::new(EchoTranslator);
                let translator: Arc<dyn Translator> = echo.clone();
                let reviewer: Arc<dyn CvReviewer> = echo;
                (translator, reviewer)
            }
        };

        Ok(Self {
            translator,
            reviewer,
            config,
        })
    }

    /// Get the global AppState instance, building it from the environment on
    /// first use.
    pub fn global() -> Result<Arc<Self>> {
        if let Some(state) = STATE.get() {
            return Ok(state.clone());
        }

        // Missing .env is fine; real deployments set the variables directly.
        let _ = dotenvy::dotenv();
        let state = Arc::new(Self::from_config(AppConfig::from_env())?);
        Ok(STATE.get_or_init(|| state).clone())
    }
}

/// Global state storage using OnceLock for thread-safe initialization
pub(crate) static STATE: OnceLock<Arc<AppState>> = OnceLock::new();
