//! Vocab (Vocabulary) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Word entity, enrichment rules, repository traits
//! - `application/` - Word service
//! - `infra/` - PostgreSQL repository, dictionary API client
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Enrichment
//! Adding a word looks it up in the dictionary API for a phonetic
//! transcription and an audio link. Missing audio falls back to a
//! synthesized TTS link; audio is always stored as https. Lookup failures
//! never fail the request.
//!
//! ## Ownership
//! Every query filters by the owning account. Words of other accounts are
//! indistinguishable from missing ones.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::VocabConfig;
pub use error::{VocabError, VocabResult};
pub use infra::{dictionary::DictionaryClient, postgres::PgWordRepository};
pub use presentation::router::vocab_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgWordRepository as WordStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
