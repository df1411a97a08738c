//! Vocab Router

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::application::config::VocabConfig;
use crate::domain::repository::{Enricher, WordRepository};
use crate::infra::{dictionary::DictionaryClient, postgres::PgWordRepository};
use crate::presentation::handlers::{self, VocabAppState};

/// Create the vocab router with PostgreSQL storage and the HTTP dictionary
///
/// Handlers expect an `AccountId` extension; mount behind the session gate.
pub fn vocab_router(
    repo: PgWordRepository,
    enricher: DictionaryClient,
    config: Arc<VocabConfig>,
) -> Router {
    vocab_router_generic(repo, enricher, config)
}

/// Create a generic vocab router for any repository / enricher pair
pub fn vocab_router_generic<R, E>(repo: R, enricher: E, config: Arc<VocabConfig>) -> Router
where
    R: WordRepository + Clone + Send + Sync + 'static,
    E: Enricher + Clone + Send + Sync + 'static,
{
    let state = VocabAppState {
        repo: Arc::new(repo),
        enricher: Arc::new(enricher),
        config,
    };

    Router::new()
        .route(
            "/words",
            get(handlers::list_words::<R, E>).post(handlers::add_word::<R, E>),
        )
        .route(
            "/words/{id}",
            put(handlers::update_word::<R, E>).delete(handlers::delete_word::<R, E>),
        )
        .with_state(state)
}
