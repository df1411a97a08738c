//! Authenticate Use Case
//!
//! Resolves a bearer token to the account it names.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> AuthenticateUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Missing, malformed and unknown-user tokens all fail as `Unauthenticated`
    pub async fn execute(&self, token: &str) -> AuthResult<Account> {
        let resolved = self
            .config
            .token_scheme()
            .resolve(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        let user_name = UserName::new(resolved).map_err(|_| AuthError::Unauthenticated)?;

        self.account_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}
