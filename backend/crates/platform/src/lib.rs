//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, constant-time compare)
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
