//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::VocabAppState;
pub use router::{vocab_router, vocab_router_generic};
