//! Opaque refresh tokens handed out at login.

use crate::database::models::RefreshToken;
use crate::errors::{ServiceError, ServiceResult};
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use rand::rngs::OsRng;

/// Number of random bytes behind each refresh token (hex-encoded to 64 characters).
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generates an opaque refresh token expiring `ttl` after `now`.
///
/// The token is drawn from the operating system's secure random source and
/// carries no claims; it is only meaningful when compared against the store.
///
/// # Errors
///
/// Returns `ServiceError::InternalError` if the random source is unavailable.
pub fn generate_refresh_token(now: DateTime<Utc>, ttl: Duration) -> ServiceResult<RefreshToken> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        ServiceError::internal_error(format!("Refresh token generation failed: {}", e))
    })?;

    Ok(RefreshToken {
        token: hex::encode(bytes),
        expires_at: now + ttl,
    })
}
