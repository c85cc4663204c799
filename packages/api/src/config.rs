use std::time::Duration;

pub const DEFAULT_TRANSLATION_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TRANSLATION_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_TRANSLATION_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Which translation backend answers `/translation`.
#[derive(Clone, PartialEq, Eq)]
pub enum TranslatorConfig {
    /// OpenAI-compatible chat completion API.
    Chat {
        api_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    },
    /// Local mode: no network, the text comes back tagged with the target language.
    Echo,
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslatorConfig::Chat {
                api_url,
                api_key,
                model,
                timeout,
            } => f
                .debug_struct("Chat")
                .field("api_url", api_url)
                .field("api_key", &api_key.as_ref().map(|_| "***"))
                .field("model", model)
                .field("timeout", timeout)
                .finish(),
            TranslatorConfig::Echo => f.write_str("Echo"),
        }
    }
}

impl TranslatorConfig {
    pub fn from_env(mode: AppMode) -> Self {
        Self::from_lookup(mode, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(mode: AppMode, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("OPENAI_API_KEY");
        if mode == AppMode::Local && api_key.is_none() {
            return TranslatorConfig::Echo;
        }

        let timeout_secs = non_empty("TRANSLATION_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TRANSLATION_TIMEOUT_SECS);

        TranslatorConfig::Chat {
            api_url: non_empty("TRANSLATION_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TRANSLATION_API_URL.to_string()),
            api_key,
            model: non_empty("TRANSLATION_MODEL")
                .unwrap_or_else(|| DEFAULT_TRANSLATION_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub translator: TranslatorConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mode = AppMode::from_env();
        Self {
            mode,
            translator: TranslatorConfig::from_env(mode),
        }
    }
}
