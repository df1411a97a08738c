//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use kernel::extract::ValidJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{ChangePasswordInput, ChangePasswordUseCase, LoginInput, LoginUseCase};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::session_token::token_from_header;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse,
};

/// Shared state for auth handlers and the session gate
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// Bearer token from the `Authorization` header, if any
pub(crate) fn authorization_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_header)
        .map(str::to_owned)
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}

// ============================================================================
// Change Password
// ============================================================================

/// POST /change-password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    ValidJson(req): ValidJson<ChangePasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let token = authorization_token(&headers).ok_or(AuthError::Unauthenticated)?;

    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    let input = ChangePasswordInput {
        old_password: req.old_password,
        new_password: req.new_password,
    };

    use_case.execute(&token, input).await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
