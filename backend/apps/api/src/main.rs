//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the crates'
//! own error types rendered through `kernel::error::AppError`.

mod app;
mod config;

use std::sync::Arc;

use auth::{
    PgAccountRepository,
    application::{SeedAccountInput, SeedAccountUseCase},
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,vocab=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Bootstrap the single account; a restart keeps the stored password
    let created = SeedAccountUseCase::new(
        Arc::new(PgAccountRepository::new(pool.clone())),
        Arc::new(config.auth.clone()),
    )
    .execute(SeedAccountInput {
        user_name: config.seed_user_name.clone(),
        password: config.seed_password.clone(),
    })
    .await?;

    if created && config.seed_password == "admin" {
        tracing::warn!("Seed account uses the default password, change it after first login");
    }

    tracing::info!(
        signed_tokens = config.auth.token_secret.is_some(),
        dictionary = %config.vocab.dictionary_api_url,
        "Auth and enrichment configured"
    );

    let app = app::build_router(pool, &config)?;

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
