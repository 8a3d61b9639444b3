use std::env;

use serde::{Deserialize, Serialize};

use self::speech::SpeechConfig;
use self::translator::TranslatorConfig;

pub mod speech;
pub mod translator;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub speech: SpeechConfig,

    /// Upper bound on one provider round trip
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            translator: TranslatorConfig::new(),
            speech: SpeechConfig::new(),
            request_timeout_secs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
