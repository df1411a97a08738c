//! Router Composition
//!
//! Mounts the auth and vocab routers, puts the word routes behind the
//! session gate and adds the shared HTTP layers.

use std::sync::Arc;

use auth::{PgAccountRepository, middleware::require_session, presentation::AuthAppState};
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use vocab::{DictionaryClient, PgWordRepository, vocab_router};

use crate::config::ServerConfig;

pub fn build_router(pool: PgPool, config: &ServerConfig) -> anyhow::Result<Router> {
    let vocab_config = Arc::new(config.vocab.clone());
    let dictionary = DictionaryClient::new(vocab_config.clone())?;

    let session_gate = AuthAppState::new(PgAccountRepository::new(pool.clone()), config.auth.clone());

    let words = vocab_router(PgWordRepository::new(pool.clone()), dictionary, vocab_config)
        .route_layer(middleware::from_fn_with_state(
            session_gate,
            require_session::<PgAccountRepository>,
        ));

    Ok(Router::new()
        .route("/health", get(health))
        .merge(auth::auth_router(
            PgAccountRepository::new(pool),
            config.auth.clone(),
        ))
        .merge(words)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins)))
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
