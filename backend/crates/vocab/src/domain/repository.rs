//! Repository Traits
//!
//! Interfaces for data persistence and the dictionary lookup.
//! Implementations are in the infrastructure layer.

use kernel::id::AccountId;

use crate::domain::entities::{NewWord, Word, WordChanges};
use crate::domain::value_objects::{Pronunciation, WordId};
use crate::error::VocabResult;

/// Word repository trait
///
/// Every method is scoped by owner: a word of another account behaves
/// exactly like a missing one.
#[trait_variant::make(WordRepository: Send)]
pub trait LocalWordRepository {
    /// All words of an owner in insertion order
    async fn list_by_owner(&self, owner_id: AccountId) -> VocabResult<Vec<Word>>;

    /// Insert and return the stored record
    async fn create(&self, new_word: &NewWord) -> VocabResult<Word>;

    /// Replace the mutable fields; `None` if no such word for this owner
    async fn update(
        &self,
        owner_id: AccountId,
        word_id: WordId,
        changes: &WordChanges,
    ) -> VocabResult<Option<Word>>;

    /// Hard delete; `false` if no such word for this owner
    async fn delete(&self, owner_id: AccountId, word_id: WordId) -> VocabResult<bool>;
}

/// Dictionary lookup trait
///
/// Infallible by contract: a lookup that fails for any reason reports
/// nothing found.
#[trait_variant::make(Enricher: Send)]
pub trait LocalEnricher {
    async fn lookup(&self, word: &str) -> Pronunciation;
}
