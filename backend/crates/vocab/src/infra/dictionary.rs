//! Dictionary API Client
//!
//! Talks to a dictionaryapi.dev compatible endpoint. One GET per lookup,
//! no retries; every failure degrades to "nothing found".

use std::sync::Arc;

use thiserror::Error;

use crate::application::config::VocabConfig;
use crate::domain::repository::Enricher;
use crate::domain::services::extract_pronunciation;
use crate::domain::value_objects::{DictionaryEntry, Pronunciation};
use crate::error::{VocabError, VocabResult};

/// Reasons a lookup found nothing. Logged, never returned to callers.
#[derive(Debug, Error)]
enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("dictionary returned status {0}")]
    Status(u16),
}

/// HTTP client for the dictionary API
#[derive(Clone)]
pub struct DictionaryClient {
    http_client: reqwest::Client,
    config: Arc<VocabConfig>,
}

impl DictionaryClient {
    pub fn new(config: Arc<VocabConfig>) -> VocabResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.lookup_timeout)
            .build()
            .map_err(|e| VocabError::Internal(format!("Dictionary client: {e}")))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let response = self
            .http_client
            .get(self.config.dictionary_url(word))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<DictionaryEntry>>().await?)
    }
}

impl Enricher for DictionaryClient {
    async fn lookup(&self, word: &str) -> Pronunciation {
        match self.fetch(word).await {
            Ok(entries) => {
                let found = extract_pronunciation(&entries);
                tracing::debug!(
                    word,
                    has_phonetic = found.phonetic.is_some(),
                    has_audio = found.audio_url.is_some(),
                    "Dictionary lookup succeeded"
                );
                found
            }
            Err(e) => {
                tracing::warn!(word, error = %e, "Dictionary lookup failed");
                Pronunciation::default()
            }
        }
    }
}
