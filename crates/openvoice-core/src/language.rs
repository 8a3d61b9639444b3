/// A supported language: the short code used for translation, a display
/// name for selection UIs, and the locale-qualified tag handed to
/// speech synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub synthesis_tag: &'static str,
}

/// Declaration order is the display order.
const SUPPORTED: &[Language] = &[
    Language { code: "en", name: "English", synthesis_tag: "en-US" },
    Language { code: "es", name: "Spanish", synthesis_tag: "es-ES" },
    Language { code: "fr", name: "French", synthesis_tag: "fr-FR" },
    Language { code: "de", name: "German", synthesis_tag: "de-DE" },
    Language { code: "it", name: "Italian", synthesis_tag: "it-IT" },
    Language { code: "pt", name: "Portuguese", synthesis_tag: "pt-PT" },
    Language { code: "hi", name: "Hindi", synthesis_tag: "hi-IN" },
    Language { code: "zh", name: "Chinese", synthesis_tag: "zh-CN" },
    Language { code: "te", name: "Telugu", synthesis_tag: "te-IN" },
    Language { code: "ja", name: "Japanese", synthesis_tag: "ja-JP" },
    Language { code: "ru", name: "Russian", synthesis_tag: "ru-RU" },
    Language { code: "ar", name: "Arabic", synthesis_tag: "ar-SA" },
    Language { code: "id", name: "Indonesian", synthesis_tag: "id-ID" },
];

#[derive(Debug, thiserror::Error)]
#[error("unsupported language tag: {0}")]
pub struct UnknownLanguage(pub String);

/// Fixed table of supported languages (ISO 639-1 codes plus the
/// locale-qualified synthesis tags).
#[derive(Debug, Clone, Copy)]
pub struct LanguageRegistry {
    languages: &'static [Language],
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self { languages: SUPPORTED }
    }
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supported languages in stable declaration order.
    pub fn list(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    /// Look up a language by bare code or locale-qualified tag.
    pub fn get(&self, tag: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| {
            lang.code.eq_ignore_ascii_case(tag) || lang.synthesis_tag.eq_ignore_ascii_case(tag)
        })
    }

    pub fn resolve(&self, tag: &str) -> Result<&Language, UnknownLanguage> {
        self.get(tag).ok_or_else(|| UnknownLanguage(tag.to_string()))
    }

    /// Synthesis tag for a code, falling back to the tag itself when
    /// it is not in the table (unknown languages are never blocked).
    pub fn synthesis_tag(&self, tag: &str) -> String {
        self.get(tag)
            .map(|lang| lang.synthesis_tag.to_string())
            .unwrap_or_else(|| tag.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_order_is_stable() {
        let registry = LanguageRegistry::new();
        let codes: Vec<&str> = registry.list().map(|l| l.code).collect();
        assert_eq!(codes[0], "en");
        assert_eq!(codes[8], "te");
        assert_eq!(codes.len(), 13);
    }

    #[test]
    fn resolves_bare_and_qualified_tags() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.get("te").unwrap().name, "Telugu");
        assert_eq!(registry.get("te-IN").unwrap().code, "te");
        assert_eq!(registry.get("EN").unwrap().code, "en");
        assert!(registry.get("xx").is_none());
    }

    #[test]
    fn synthesis_tag_falls_back_to_input() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.synthesis_tag("hi"), "hi-IN");
        assert_eq!(registry.synthesis_tag("ko"), "ko");
    }
}
