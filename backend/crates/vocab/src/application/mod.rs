//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod word_service;

pub use config::VocabConfig;
pub use word_service::{AddWordInput, UpdateWordInput, WordService};
