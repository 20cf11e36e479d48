//! JWT access token utilities.
//!
//! Access tokens are HS256-signed and carry only the registered claims
//! `iss`, `sub`, `iat` and `exp`. Expiry is the only way a token stops being
//! valid; there is no revocation list.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::{ServiceError, ServiceResult};

/// Issuer written into, and required on, every access token.
pub const TOKEN_ISSUER: &str = "chirpy";

/// JWT Claims structure asserting an identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Issuer
    pub iss: String,
    /// Email of the authenticated user
    pub sub: String,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
}

/// JWT token utility for creating and validating tokens
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: Duration,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the process-wide secret.
    pub fn new(secret: &str, expires_in_seconds: u64) -> ServiceResult<Self> {
        if secret.is_empty() {
            return Err(ServiceError::internal_error("JWT secret must not be empty"));
        }

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // Expiry is checked against the caller's clock in `validate_token`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in: Duration::seconds(expires_in_seconds as i64),
        })
    }

    /// Generate a signed access token for `subject`, valid from `now` until `now + expires_in`.
    pub fn generate_token(&self, subject: &str, now: DateTime<Utc>) -> ServiceResult<String> {
        let exp = now + self.expires_in;

        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a JWT token.
    ///
    /// Bad signatures, foreign issuers, garbage input and expired tokens all
    /// come back as `ServiceError::InvalidToken`; the message is for logs only.
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> ServiceResult<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| ServiceError::invalid_token(format!("Token validation failed: {}", e)))?;

        if claims.is_expired_at(now) {
            return Err(ServiceError::invalid_token(format!(
                "Token for {} expired at {}",
                claims.sub, claims.exp
            )));
        }

        Ok(claims)
    }
}

impl Claims {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// A token is usable only while `now < exp`.
    ///
    /// `iat` and `exp` are whole Unix seconds, so the comparison truncates `now`
    /// the same way. A token issued part way into a second can therefore expire
    /// up to one second before `issued + expires_in` measured with sub-second
    /// precision.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
