use std::sync::Arc;

use crate::{TranslateError, Translation, TranslationRequest, Translator};

/// Front door for translation: validates the request, then hands it to
/// whichever provider was configured. No retry, no caching; re-issuing
/// a request is always safe.
#[derive(Clone)]
pub struct TranslationInvoker {
    provider: Arc<dyn Translator>,
}

impl TranslationInvoker {
    pub fn new(provider: Arc<dyn Translator>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> String {
        self.provider.metadata().name
    }

    /// Empty text is rejected here, before any network traffic.
    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        if request.text.trim().is_empty() {
            return Err(TranslateError::InvalidInput);
        }

        self.provider.translate(&request).await
    }
}
