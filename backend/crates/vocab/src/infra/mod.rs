//! Infrastructure Layer
//!
//! Database implementation and the dictionary API client.

pub mod dictionary;
pub mod postgres;

pub use dictionary::DictionaryClient;
pub use postgres::PgWordRepository;
