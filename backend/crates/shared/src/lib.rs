//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary that every backend crate agrees on:
//! - The unified error type and its HTTP classification
//! - Typed identifiers (`AccountId`)
//! - Request extraction helpers that speak the unified error type
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
