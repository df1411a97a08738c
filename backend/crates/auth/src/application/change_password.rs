//! Change Password Use Case

use std::sync::Arc;

use crate::application::authenticate::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<A>
where
    A: AccountRepository,
{
    account_repo: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> ChangePasswordUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(account_repo: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// The new password is stored as given, no strength rules.
    pub async fn execute(&self, token: &str, input: ChangePasswordInput) -> AuthResult<()> {
        let mut account = AuthenticateUseCase::new(self.account_repo.clone(), self.config.clone())
            .execute(token)
            .await?;

        let old_password = RawPassword::new(input.old_password);
        if !account
            .password_hash
            .verify(&old_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let new_password = RawPassword::new(input.new_password);
        let new_hash = UserPassword::from_raw(&new_password, self.config.pepper())?;
        account.update_password(new_hash);

        self.account_repo.update(&account).await?;

        tracing::info!(account_id = %account.account_id, "Password changed");

        Ok(())
    }
}
