//! Auth Router

use axum::{Router, middleware, routing::post};

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAccountRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// `/login` is public, `/change-password` sits behind the session gate.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);

    Router::new()
        .route(
            "/change-password",
            post(handlers::change_password::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<R>,
        ))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
