//! Word Service
//!
//! Owner-scoped word operations. Adding a word runs the enrichment
//! pipeline; nothing else talks to the dictionary.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::application::config::VocabConfig;
use crate::domain::entities::{NewWord, Word, WordChanges};
use crate::domain::repository::{Enricher, WordRepository};
use crate::domain::services::complete_enrichment;
use crate::domain::value_objects::{Enrichment, Pronunciation, WordId};
use crate::error::{VocabError, VocabResult};

/// Add word input
pub struct AddWordInput {
    pub word: String,
    pub definition: String,
}

/// Update word input, every field replaces the stored one
pub struct UpdateWordInput {
    pub word: String,
    pub phonetic: String,
    pub definition: String,
    pub audio_url: String,
}

/// Word service
pub struct WordService<R, E>
where
    R: WordRepository,
    E: Enricher,
{
    word_repo: Arc<R>,
    enricher: Arc<E>,
    config: Arc<VocabConfig>,
}

impl<R, E> WordService<R, E>
where
    R: WordRepository,
    E: Enricher,
{
    pub fn new(word_repo: Arc<R>, enricher: Arc<E>, config: Arc<VocabConfig>) -> Self {
        Self {
            word_repo,
            enricher,
            config,
        }
    }

    pub async fn list(&self, owner_id: AccountId) -> VocabResult<Vec<Word>> {
        self.word_repo.list_by_owner(owner_id).await
    }

    /// Enrich and store a new word. A failed lookup never blocks the insert.
    ///
    /// The text is stored as sent; only the lookup key is trimmed.
    pub async fn add(&self, owner_id: AccountId, input: AddWordInput) -> VocabResult<Word> {
        let enrichment = self.enrich(input.word.trim()).await;
        let new_word = NewWord::enriched(owner_id, input.word, input.definition, enrichment);

        let word = self.word_repo.create(&new_word).await?;

        tracing::info!(
            account_id = %owner_id,
            word_id = %word.word_id,
            has_phonetic = word.phonetic.is_some(),
            "Word added"
        );

        Ok(word)
    }

    /// Replace a word's fields verbatim. No re-enrichment.
    pub async fn update(
        &self,
        owner_id: AccountId,
        word_id: WordId,
        input: UpdateWordInput,
    ) -> VocabResult<Word> {
        let changes = WordChanges::new(
            input.word,
            input.phonetic,
            input.definition,
            input.audio_url,
        );

        let word = self
            .word_repo
            .update(owner_id, word_id, &changes)
            .await?
            .ok_or(VocabError::NotFound)?;

        tracing::info!(account_id = %owner_id, word_id = %word_id, "Word updated");

        Ok(word)
    }

    pub async fn delete(&self, owner_id: AccountId, word_id: WordId) -> VocabResult<()> {
        if !self.word_repo.delete(owner_id, word_id).await? {
            return Err(VocabError::NotFound);
        }

        tracing::info!(account_id = %owner_id, word_id = %word_id, "Word deleted");

        Ok(())
    }

    async fn enrich(&self, word: &str) -> Enrichment {
        // Nothing to look up for blank text
        let found = if word.is_empty() {
            Pronunciation::default()
        } else {
            self.enricher.lookup(word).await
        };
        complete_enrichment(found, word, &self.config.tts_url_template)
    }
}
