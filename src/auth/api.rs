//! Authentication API Endpoints
//! Mission: Registration and login

use crate::auth::{
    credential_store::CredentialStore,
    jwt::JwtHandler,
    models::{CredentialsForm, TokenResponse},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub credentials: Arc<CredentialStore>,
    pub jwt: Arc<JwtHandler>,
}

/// Register endpoint - POST /api/register
///
/// A missing or empty field answers 200 with an error-shaped body, matching
/// the existing clients' expectations; only storage failures get an error
/// status.
pub async fn register(
    State(state): State<AuthState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AuthApiError> {
    if form.username.is_empty() || form.password.is_empty() {
        return Ok(Json(json!({
            "msg": "Username and password must not be empty",
            "popup": "error"
        }))
        .into_response());
    }

    // Unconditional insert: no duplicate-username check.
    state.credentials.add(&form.username, &form.password)?;

    info!("Registered user {}", form.username);

    Ok(Json(json!({
        "msg": "Registration successful",
        "popup": "success"
    }))
    .into_response())
}

/// Login endpoint - POST /api/login
///
/// A failed login also answers 200 with an error-shaped body. The token
/// embeds the submitted username, which the cross-record matching in
/// [`CredentialStore::credentials_match`] does not guarantee belongs to the
/// record whose password matched.
pub async fn login(
    State(state): State<AuthState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AuthApiError> {
    let valid = state
        .credentials
        .credentials_match(&form.username, &form.password)?;

    if !valid {
        warn!("Failed login attempt: {}", form.username);
        return Ok(Json(json!({
            "msg": "Wrong username or password",
            "popup": "error"
        }))
        .into_response());
    }

    let token = state.jwt.issue(&form.username)?;

    info!("Login successful: {}", form.username);

    Ok(Json(TokenResponse {
        msg: "Login successful".to_string(),
        token,
    })
    .into_response())
}

/// Auth API errors. Everything here is a backend failure; business
/// failures are 200 responses with an error-shaped body.
#[derive(Debug)]
pub enum AuthApiError {
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for AuthApiError {
    fn from(err: anyhow::Error) -> Self {
        AuthApiError::Internal(err)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let AuthApiError::Internal(err) = self;
        tracing::error!("Auth backend error: {}", err);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "msg": "Internal server error", "popup": "error" })),
        )
            .into_response()
    }
}
