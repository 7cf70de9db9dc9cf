//! Artikel Backend
//! Mission: Minimal blog platform API with token-based auth
//!
//! Clients register and log in with username/password, receive an HS256
//! JWT, and attach it as the `datatoken` query parameter for article CRUD.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artikel_backend::{
    app::create_router,
    auth::{CredentialStore, JwtHandler},
    blog::ArticleStore,
    config::Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env();

    let credentials = Arc::new(CredentialStore::new(&config.database_path)?);
    let articles = Arc::new(ArticleStore::new(&config.database_path)?);
    let jwt = Arc::new(JwtHandler::new(config.jwt_secret.clone()));

    info!("Storage initialized at {}", config.database_path);

    let app = create_router(credentials, articles, jwt);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with env-filter support
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artikel_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
