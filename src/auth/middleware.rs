//! Authentication Middleware
//! Mission: Gate protected endpoints on a valid token

use crate::auth::jwt::{JwtHandler, TokenError};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Auth gate that validates the token before the handler runs.
///
/// The token is read from the `datatoken` URL query parameter, not from an
/// Authorization header. That is where existing clients send it, so it is
/// the compatibility contract. On success the verified claims are inserted
/// into request extensions for handlers that need the username.
pub async fn require_token(
    State(jwt): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, TokenError> {
    let token = token_from_query(req.uri().query()).ok_or(TokenError::Missing)?;

    let claims = jwt.verify(&token)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Pull `datatoken` out of a raw query string. Percent-encoded values are
/// decoded; base64url tokens don't need it, but clients that encode anyway
/// must not be locked out.
fn token_from_query(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "datatoken")
        .map(|(_, value)| value.into_owned())
        .filter(|t| !t.is_empty())
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let msg = match self {
            TokenError::Missing => "Token is missing",
            TokenError::InvalidSignature => "Token signature is invalid",
            TokenError::Expired => "Token has expired",
            TokenError::Malformed => "Token format is invalid",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "msg": msg, "popup": "error" })),
        )
            .into_response()
    }
}
