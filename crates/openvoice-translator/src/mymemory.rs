use std::time::Duration;

use async_trait::async_trait;

use crate::{
    ProviderMetadata, TranslateError, Translation, TranslationRequest, Translator,
};

pub const DEFAULT_API_URL: &str = "https://api.mymemory.translated.net/get";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Free query-string API: `GET {url}?q={text}&langpair={src}|{tgt}`,
/// translated text under `responseData.translatedText`.
#[derive(Clone)]
pub struct MyMemoryProvider {
    client: reqwest::Client,
    api_url: String,
    timeout: Duration,
}

impl MyMemoryProvider {
    pub fn new(api_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            timeout,
        }
    }
}

impl Default for MyMemoryProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string(), DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Translator for MyMemoryProvider {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        let langpair = request.pair.to_string();

        let response = self
            .client
            .get(&self.api_url)
            .timeout(self.timeout)
            .query(&[("q", request.text.as_str()), ("langpair", &langpair)])
            .send()
            .await?;

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
            provider: "mymemory".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// A 200 with a blank or missing field is a data condition, not a
/// transport failure.
fn extract_translated_text(body: &serde_json::Value) -> Result<String, TranslateError> {
    let text = body["responseData"]["translatedText"]
        .as_str()
        .unwrap_or("");

    if text.trim().is_empty() {
        return Err(TranslateError::NoTranslation);
    }

    Ok(text.to_string())
}
