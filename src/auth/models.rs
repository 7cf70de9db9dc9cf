//! Authentication Models
//! Mission: Define the auth wire types

use serde::{Deserialize, Serialize};

/// JWT claims payload. `exp` is epoch seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: usize,
}

/// Form body for /api/register and /api/login.
///
/// Fields default to empty so an absent field and an empty one validate the
/// same way.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login success body.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub msg: String,
    pub token: String,
}
