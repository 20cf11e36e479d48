//! Data structures for authentication requests and responses.

use serde::{Deserialize, Serialize};

/// Login request payload.
///
/// Not validated: any well-formed pair goes to the credential check, so an
/// empty email is an unknown identity and an empty password a wrong one.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response containing tokens and user info
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    pub token: String,
    pub refresh_token: String,
}

/// Token refresh response
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub token: String,
}
