//! Process Configuration
//! Mission: Read all configuration once at startup, pass it down by value

use tracing::warn;

const DEFAULT_JWT_SECRET: &str = "dev-secret-change-in-production";

/// Immutable process configuration. Nothing reads ambient environment
/// state after this is built.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./blog.db".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000);

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using development default");
            DEFAULT_JWT_SECRET.to_string()
        });

        Self {
            database_path,
            port,
            jwt_secret,
        }
    }
}
