//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod change_password;
pub mod config;
pub mod login;
pub mod seed_account;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use seed_account::{SeedAccountInput, SeedAccountUseCase};
