//! Seed Account Use Case
//!
//! Bootstraps the single account on first start. Running it again with an
//! existing user name leaves the stored password untouched.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Seed input
pub struct SeedAccountInput {
    pub user_name: String,
    pub password: String,
}

/// Seed account use case
pub struct SeedAccountUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> SeedAccountUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Returns `true` when a new account was created
    pub async fn execute(&self, input: SeedAccountInput) -> AuthResult<bool> {
        let user_name = UserName::new(input.user_name).map_err(|e| {
            tracing::error!(error = %e, "Seed user name rejected");
            AuthError::InvalidInput
        })?;

        if self
            .account_repo
            .find_by_user_name(&user_name)
            .await?
            .is_some()
        {
            tracing::debug!(user_name = %user_name, "Seed account already present");
            return Ok(false);
        }

        let raw_password = RawPassword::new(input.password);
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let account = Account::new(user_name, password_hash);

        self.account_repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            user_name = %account.user_name,
            "Seed account created"
        );

        Ok(true)
    }
}
