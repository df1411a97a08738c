//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Word, NewWord, WordChanges)
//! - Domain value objects (WordId, Pronunciation, dictionary records)
//! - Domain services (pronunciation extraction, audio URL rules)
//! - Repository and lookup traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
