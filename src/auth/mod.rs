//! Authentication Module
//! Mission: Credential records, JWT issuance, and the request gate

pub mod api;
pub mod credential_store;
pub mod jwt;
pub mod middleware;
pub mod models;

pub use api::AuthState;
pub use credential_store::CredentialStore;
pub use jwt::JwtHandler;
pub use middleware::require_token;
