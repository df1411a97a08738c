//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{NewWord, Word, WordChanges};
use crate::domain::repository::WordRepository;
use crate::domain::value_objects::WordId;
use crate::error::VocabResult;

/// PostgreSQL-backed word repository
#[derive(Clone)]
pub struct PgWordRepository {
    pool: PgPool,
}

impl PgWordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WordRepository for PgWordRepository {
    async fn list_by_owner(&self, owner_id: AccountId) -> VocabResult<Vec<Word>> {
        let rows = sqlx::query_as::<_, WordRow>(
            r#"
            SELECT
                word_id,
                owner_id,
                word,
                phonetic,
                definition,
                audio_url,
                created_at,
                updated_at
            FROM words
            WHERE owner_id = $1
            ORDER BY word_id
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Word::from).collect())
    }

    async fn create(&self, new_word: &NewWord) -> VocabResult<Word> {
        let row = sqlx::query_as::<_, WordRow>(
            r#"
            INSERT INTO words (
                owner_id,
                word,
                phonetic,
                definition,
                audio_url
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                word_id,
                owner_id,
                word,
                phonetic,
                definition,
                audio_url,
                created_at,
                updated_at
            "#,
        )
        .bind(new_word.owner_id.as_uuid())
        .bind(&new_word.word)
        .bind(&new_word.phonetic)
        .bind(&new_word.definition)
        .bind(&new_word.audio_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        owner_id: AccountId,
        word_id: WordId,
        changes: &WordChanges,
    ) -> VocabResult<Option<Word>> {
        // Ownership is part of the predicate, so a foreign row is "not found"
        let row = sqlx::query_as::<_, WordRow>(
            r#"
            UPDATE words
            SET word = $3,
                phonetic = $4,
                definition = $5,
                audio_url = $6,
                updated_at = NOW()
            WHERE word_id = $1 AND owner_id = $2
            RETURNING
                word_id,
                owner_id,
                word,
                phonetic,
                definition,
                audio_url,
                created_at,
                updated_at
            "#,
        )
        .bind(word_id.value())
        .bind(owner_id.as_uuid())
        .bind(&changes.word)
        .bind(&changes.phonetic)
        .bind(&changes.definition)
        .bind(&changes.audio_url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Word::from))
    }

    async fn delete(&self, owner_id: AccountId, word_id: WordId) -> VocabResult<bool> {
        let deleted = sqlx::query("DELETE FROM words WHERE word_id = $1 AND owner_id = $2")
            .bind(word_id.value())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct WordRow {
    word_id: i64,
    owner_id: Uuid,
    word: String,
    phonetic: Option<String>,
    definition: String,
    audio_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WordRow> for Word {
    fn from(row: WordRow) -> Self {
        Word {
            word_id: WordId::new(row.word_id),
            owner_id: AccountId::from_uuid(row.owner_id),
            word: row.word,
            phonetic: row.phonetic,
            definition: row.definition,
            audio_url: row.audio_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
