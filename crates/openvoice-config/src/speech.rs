use std::env;

use serde::{Deserialize, Serialize};

fn default_recognition_lang() -> String {
    "en".to_string()
}

fn default_synthesis_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_recognition_lang")]
    pub recognition_lang: String,
    /// Speak translated results out loud after a successful workflow
    #[serde(default = "default_synthesis_enabled")]
    pub synthesis_enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            recognition_lang: default_recognition_lang(),
            synthesis_enabled: default_synthesis_enabled(),
        }
    }
}

impl SpeechConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            recognition_lang: env::var("RECOGNITION_LANG").unwrap_or(defaults.recognition_lang),
            synthesis_enabled: env::var("SYNTHESIS_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.synthesis_enabled),
        }
    }
}
