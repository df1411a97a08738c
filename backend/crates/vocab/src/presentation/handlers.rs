//! HTTP Handlers
//!
//! All routes here sit behind the session gate, which supplies the
//! caller's `AccountId` as a request extension.

use axum::Json;
use axum::extract::{Extension, Path, State};
use kernel::extract::ValidJson;
use kernel::id::AccountId;
use std::sync::Arc;

use crate::application::config::VocabConfig;
use crate::application::{AddWordInput, UpdateWordInput, WordService};
use crate::domain::repository::{Enricher, WordRepository};
use crate::domain::value_objects::WordId;
use crate::error::{VocabError, VocabResult};
use crate::presentation::dto::{AddWordRequest, MessageResponse, UpdateWordRequest, WordResponse};

/// Shared state for vocab handlers
#[derive(Clone)]
pub struct VocabAppState<R, E>
where
    R: WordRepository + Clone + Send + Sync + 'static,
    E: Enricher + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub enricher: Arc<E>,
    pub config: Arc<VocabConfig>,
}

impl<R, E> VocabAppState<R, E>
where
    R: WordRepository + Clone + Send + Sync + 'static,
    E: Enricher + Clone + Send + Sync + 'static,
{
    fn service(&self) -> WordService<R, E> {
        WordService::new(self.repo.clone(), self.enricher.clone(), self.config.clone())
    }
}

/// Non-numeric ids cannot name a word
fn parse_word_id(raw: &str) -> VocabResult<WordId> {
    WordId::parse(raw).ok_or(VocabError::NotFound)
}

/// GET /words
pub async fn list_words<R, E>(
    State(state): State<VocabAppState<R, E>>,
    Extension(owner_id): Extension<AccountId>,
) -> VocabResult<Json<Vec<WordResponse>>>
where
    R: WordRepository + Clone + Send + Sync + 'static,
    E: Enricher + Clone + Send + Sync + 'static,
{
    let words = state.service().list(owner_id).await?;

    Ok(Json(words.into_iter().map(WordResponse::from).collect()))
}

/// POST /words
pub async fn add_word<R, E>(
    State(state): State<VocabAppState<R, E>>,
    Extension(owner_id): Extension<AccountId>,
    ValidJson(req): ValidJson<AddWordRequest>,
) -> VocabResult<Json<WordResponse>>
where
    R: WordRepository + Clone + Send + Sync + 'static,
    E: Enricher + Clone + Send + Sync + 'static,
{
    let input = AddWordInput {
        word: req.word,
        definition: req.definition,
    };

    let word = state.service().add(owner_id, input).await?;

    Ok(Json(word.into()))
}

/// PUT /words/{id}
pub async fn update_word<R, E>(
    State(state): State<VocabAppState<R, E>>,
    Extension(owner_id): Extension<AccountId>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateWordRequest>,
) -> VocabResult<Json<WordResponse>>
where
    R: WordRepository + Clone + Send + Sync + 'static,
    E: Enricher + Clone + Send + Sync + 'static,
{
    let word_id = parse_word_id(&id)?;

    let input = UpdateWordInput {
        word: req.word,
        phonetic: req.phonetic,
        definition: req.definition,
        audio_url: req.audio_url,
    };

    let word = state.service().update(owner_id, word_id, input).await?;

    Ok(Json(word.into()))
}

/// DELETE /words/{id}
pub async fn delete_word<R, E>(
    State(state): State<VocabAppState<R, E>>,
    Extension(owner_id): Extension<AccountId>,
    Path(id): Path<String>,
) -> VocabResult<Json<MessageResponse>>
where
    R: WordRepository + Clone + Send + Sync + 'static,
    E: Enricher + Clone + Send + Sync + 'static,
{
    let word_id = parse_word_id(&id)?;

    state.service().delete(owner_id, word_id).await?;

    Ok(Json(MessageResponse {
        message: "Word deleted successfully".to_string(),
    }))
}
