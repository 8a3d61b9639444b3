use std::fmt;

pub mod invoker;
pub mod mymemory;
pub mod rapid;

pub use invoker::TranslationInvoker;
pub use mymemory::MyMemoryProvider;
pub use rapid::RapidTranslateProvider;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate the request's text across its language pair
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Source/target tags for one translation. Equal source and target is
/// allowed; the provider treats it as a no-op translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: LanguageCode,
    pub target: LanguageCode,
}

impl LanguagePair {
    pub fn new(source: impl Into<LanguageCode>, target: impl Into<LanguageCode>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.source, self.target)
    }
}

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub pair: LanguagePair,
}

/// Normalized success value from a provider response.
#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub pair: LanguagePair,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Empty text, rejected before any network call
    #[error("no text to translate")]
    InvalidInput,

    /// Provider responded but produced no usable translation
    #[error("provider returned no translation")]
    NoTranslation,

    /// Transport failure, non-2xx status, or malformed body
    #[error("translation provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        Self::ProviderUnavailable(err.to_string())
    }
}
