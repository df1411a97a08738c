//! Account Entity
//!
//! The login identity of this deployment. The user name never changes
//! after creation; the password hash does.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier, owner key for words
    pub account_id: AccountId,
    /// Unique login name
    pub user_name: UserName,
    /// Hashed password
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            user_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update password
    pub fn update_password(&mut self, new_password: UserPassword) {
        self.password_hash = new_password;
        self.updated_at = Utc::now();
    }
}
