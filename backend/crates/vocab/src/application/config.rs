//! Application Configuration
//!
//! Configuration for the vocab application layer.

use std::time::Duration;

pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_TTS_URL_TEMPLATE: &str = "https://dict.youdao.com/dictvoice?audio={word}&type=2";

/// Vocab application configuration
#[derive(Debug, Clone)]
pub struct VocabConfig {
    /// Base URL; the escaped word is appended as the last path segment
    pub dictionary_api_url: String,
    /// Fallback audio link, `{word}` is replaced by the escaped word
    pub tts_url_template: String,
    /// Upper bound for one dictionary request
    pub lookup_timeout: Duration,
    /// User-Agent sent to the dictionary API
    pub user_agent: String,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            dictionary_api_url: DEFAULT_DICTIONARY_API_URL.to_string(),
            tts_url_template: DEFAULT_TTS_URL_TEMPLATE.to_string(),
            lookup_timeout: Duration::from_secs(5),
            user_agent: concat!("vocab/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl VocabConfig {
    pub fn with_dictionary_api_url(mut self, url: impl Into<String>) -> Self {
        self.dictionary_api_url = url.into();
        self
    }

    pub fn with_tts_url_template(mut self, template: impl Into<String>) -> Self {
        self.tts_url_template = template.into();
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Lookup URL for a word
    pub fn dictionary_url(&self, word: &str) -> String {
        format!(
            "{}/{}",
            self.dictionary_api_url.trim_end_matches('/'),
            urlencoding::encode(word)
        )
    }
}
