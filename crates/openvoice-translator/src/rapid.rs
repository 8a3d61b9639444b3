use std::time::Duration;

use async_trait::async_trait;

use crate::{
    ProviderMetadata, TranslateError, Translation, TranslationRequest, Translator,
};

pub const DEFAULT_API_URL: &str = "https://text-translator2.p.rapidapi.com/translate";

/// Key-authenticated POST API (RapidAPI text-translator shape):
/// form-encoded `source_language`/`target_language`/`text`, translated
/// text under `data.translatedText`.
#[derive(Clone)]
pub struct RapidTranslateProvider {
    client: reqwest::Client,
    api_url: String,
    api_host: String,
    api_key: String,
    timeout: Duration,
}

impl RapidTranslateProvider {
    pub fn new(api_url: String, api_host: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_host,
            api_key,
            timeout,
        }
    }
}

#[async_trait]
impl Translator for RapidTranslateProvider {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::ProviderUnavailable(
                "no API key configured".to_string(),
            ));
        }

        let params = [
            ("source_language", request.pair.source.as_str()),
            ("target_language", request.pair.target.as_str()),
            ("text", request.text.as_str()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .form(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::ProviderUnavailable(
                "rate limit exceeded".to_string(),
            ));
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(TranslateError::ProviderUnavailable(
                "authentication rejected".to_string(),
            ));
        }

        if !response.status().is_success() {
            return Err(TranslateError::ProviderUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ProviderUnavailable(format!("failed to parse response: {}", e))
        })?;

        let text = extract_translated_text(&json)?;

        Ok(Translation {
            text,
            pair: request.pair.clone(),
            provider: "rapid".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "RapidTranslate".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}

fn extract_translated_text(body: &serde_json::Value) -> Result<String, TranslateError> {
    let text = body["data"]["translatedText"].as_str().unwrap_or("");

    if text.trim().is_empty() {
        return Err(TranslateError::NoTranslation);
    }

    Ok(text.to_string())
}
