//! Domain Entities
//!
//! Core business entities for the vocab domain.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_objects::{Enrichment, WordId};

/// Word entity - a stored vocabulary entry, always owned by one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub word_id: WordId,
    pub owner_id: AccountId,
    pub word: String,
    pub phonetic: Option<String>,
    pub definition: String,
    pub audio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A word about to be inserted; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub owner_id: AccountId,
    pub word: String,
    pub phonetic: Option<String>,
    pub definition: String,
    pub audio_url: Option<String>,
}

impl NewWord {
    pub fn enriched(
        owner_id: AccountId,
        word: String,
        definition: String,
        enrichment: Enrichment,
    ) -> Self {
        Self {
            owner_id,
            word,
            phonetic: enrichment.phonetic,
            definition,
            audio_url: Some(enrichment.audio_url),
        }
    }
}

/// Replacement values for an existing word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordChanges {
    pub word: String,
    pub phonetic: Option<String>,
    pub definition: String,
    pub audio_url: Option<String>,
}

impl WordChanges {
    /// Empty phonetic or audio means "absent"
    pub fn new(word: String, phonetic: String, definition: String, audio_url: String) -> Self {
        Self {
            word,
            phonetic: non_empty(phonetic),
            definition,
            audio_url: non_empty(audio_url),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
