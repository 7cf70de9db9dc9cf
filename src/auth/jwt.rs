//! JWT Token Handler
//! Mission: Issue and verify HS256 tokens carrying a username claim

use crate::auth::models::Claims;
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// Token lifetime, fixed by the wire contract.
pub const TOKEN_TTL_SECS: i64 = 7200;

/// Why a token was rejected. `Missing` is produced by the gate when no
/// token was supplied at all; `verify` itself returns the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Missing,
    InvalidSignature,
    Expired,
    Malformed,
}

/// JWT handler for token operations. Stateless: validity is signature plus
/// expiry, there is no revocation.
pub struct JwtHandler {
    secret: String,
}

impl JwtHandler {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a token for `username`, expiring TOKEN_TTL_SECS from now.
    pub fn issue(&self, username: &str) -> Result<String> {
        let exp = Utc::now()
            .checked_add_signed(chrono::Duration::seconds(TOKEN_TTL_SECS))
            .context("Invalid expiry timestamp")?
            .timestamp() as usize;

        let claims = Claims {
            username: username.to_string(),
            exp,
        };

        debug!("Issuing token for {}, ttl {}s", username, TOKEN_TTL_SECS);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign token")
    }

    /// Verify a token and return its claims.
    ///
    /// Expiry is inclusive: a token dies at its `exp` second, exactly
    /// TOKEN_TTL_SECS after issuance.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let claims = match decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => data.claims,
            Err(e) => {
                return Err(match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                })
            }
        };

        // The library's expiry check is exclusive (a token with exp == now
        // still decodes), so the boundary second is enforced here.
        if claims.exp <= Utc::now().timestamp() as usize {
            return Err(TokenError::Expired);
        }

        debug!("Verified token for {}", claims.username);
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_with_exp(secret: &str, username: &str, exp: usize) -> String {
        let claims = Claims {
            username: username.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        let token = handler.issue("alice").unwrap();
        assert!(!token.is_empty());

        let claims = handler.verify(&token).unwrap();
        assert_eq!(claims.username, "alice");

        let expected = (Utc::now().timestamp() + TOKEN_TTL_SECS) as usize;
        // Allow a little slack for test runtime.
        assert!(claims.exp >= expected - 5 && claims.exp <= expected);
    }

    #[test]
    fn test_wrong_secret_is_invalid_signature() {
        let handler1 = JwtHandler::new("secret1".to_string());
        let handler2 = JwtHandler::new("secret2".to_string());

        let token = handler1.issue("alice").unwrap();
        assert_eq!(
            handler2.verify(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        let past = (Utc::now().timestamp() - 60) as usize;
        let token = encode_with_exp("test-secret-key-12345", "alice", past);
        assert_eq!(handler.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_token_expires_at_the_boundary_second() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        // A token whose exp is the current second is already dead.
        let now = Utc::now().timestamp() as usize;
        let token = encode_with_exp("test-secret-key-12345", "alice", now);
        assert_eq!(handler.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_token_valid_until_expiry() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        let soon = (Utc::now().timestamp() + 5) as usize;
        let token = encode_with_exp("test-secret-key-12345", "alice", soon);
        assert!(handler.verify(&token).is_ok());
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string());

        assert_eq!(
            handler.verify("not-a-token").unwrap_err(),
            TokenError::Malformed
        );
        assert_eq!(
            handler.verify("still.not.a-token").unwrap_err(),
            TokenError::Malformed
        );
    }
}
