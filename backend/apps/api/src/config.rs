//! Server Configuration
//!
//! Everything the binary reads from the environment, resolved once at
//! startup. `.env` is loaded by `main` before this runs.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use vocab::VocabConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8089";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:8089,http://127.0.0.1:8089";
const DEFAULT_SEED_USERNAME: &str = "admin";
const DEFAULT_SEED_PASSWORD: &str = "admin";
const RANDOM_TOKEN_SECRET: &str = "random";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub seed_user_name: String,
    pub seed_password: String,
    pub auth: AuthConfig,
    pub vocab: VocabConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:8089")?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let password_pepper = get("PASSWORD_PEPPER").map(String::into_bytes);

        // `random` signs with a fresh key per process
        let auth = match get("SESSION_TOKEN_SECRET") {
            Some(value) if value.trim() == RANDOM_TOKEN_SECRET => AuthConfig::with_random_secret(),
            Some(b64) => AuthConfig::default().with_token_secret(Some(decode_token_secret(&b64)?)),
            None => AuthConfig::default(),
        }
        .with_pepper(password_pepper);

        let mut vocab = VocabConfig::default();
        if let Some(url) = get("DICTIONARY_API_URL") {
            vocab = vocab.with_dictionary_api_url(url);
        }
        if let Some(template) = get("TTS_URL_TEMPLATE") {
            if !template.contains(vocab::domain::services::TTS_WORD_PLACEHOLDER) {
                bail!("TTS_URL_TEMPLATE must contain {{word}}");
            }
            vocab = vocab.with_tts_url_template(template);
        }
        if let Some(secs) = get("ENRICHMENT_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .context("ENRICHMENT_TIMEOUT_SECS must be a whole number of seconds")?;
            vocab = vocab.with_lookup_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            seed_user_name: get("SEED_USERNAME").unwrap_or_else(|| DEFAULT_SEED_USERNAME.to_string()),
            seed_password: get("SEED_PASSWORD").unwrap_or_else(|| DEFAULT_SEED_PASSWORD.to_string()),
            auth,
            vocab,
        })
    }
}

fn decode_token_secret(b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(b64.trim())
        .context("SESSION_TOKEN_SECRET must be standard base64")?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("SESSION_TOKEN_SECRET must decode to 32 bytes"))
}
