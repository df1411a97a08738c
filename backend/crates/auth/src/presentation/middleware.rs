//! Auth Middleware
//!
//! Session gate for protected routes. On success the resolved account's id
//! is placed in the request extensions for downstream handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::AccountId;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::handlers::{AuthAppState, authorization_token};

/// Middleware that requires a token naming an existing account
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_session<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> AuthResult<Response>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = authorization_token(req.headers()).ok_or(AuthError::Unauthenticated)?;

    let account = AuthenticateUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&token)
        .await?;

    let account_id: AccountId = account.account_id;
    req.extensions_mut().insert(account_id);

    Ok(next.run(req).await)
}
