use std::env;

use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "mymemory".to_string()
}

fn default_api_host() -> String {
    "text-translator2.p.rapidapi.com".to_string()
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "te".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// "mymemory" or "rapid"
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Empty means the selected provider's default endpoint
    #[serde(default)]
    pub api_url: String,
    /// Only meaningful for the key-authenticated provider
    #[serde(default = "default_api_host")]
    pub api_host: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: String::new(),
            api_host: default_api_host(),
            api_key: String::new(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}

impl TranslatorConfig {
    /// Credentials and endpoint are injected through the environment,
    /// never hardcoded.
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            provider: env::var("TRANSLATOR_PROVIDER").unwrap_or(defaults.provider),
            api_url: env::var("TRANSLATOR_API_URL").unwrap_or(defaults.api_url),
            api_host: env::var("TRANSLATOR_API_HOST").unwrap_or(defaults.api_host),
            api_key: env::var("TRANSLATOR_API_KEY").unwrap_or_default(),
            source_lang: env::var("SOURCE_LANG").unwrap_or(defaults.source_lang),
            target_lang: env::var("TARGET_LANG").unwrap_or(defaults.target_lang),
        }
    }
}
