//! Password hashing with bcrypt.
//!
//! The produced digest embeds algorithm, cost and salt, so verification needs
//! nothing besides the stored string. Both operations are CPU-bound and run on
//! the blocking thread pool.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify};

/// Hashes a plaintext password with a fresh random salt.
///
/// # Arguments
/// * `password` - Plain text password to hash
/// * `cost` - bcrypt cost factor (4..=31)
///
/// # Errors
/// Returns `ServiceError::InternalError` if hashing fails
pub async fn hash_password(password: String, cost: u32) -> ServiceResult<String> {
    tokio::task::spawn_blocking(move || hash(password, cost))
        .await
        .map_err(|e| ServiceError::internal_error(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
}

/// Verifies a plaintext password against a stored hash.
///
/// A wrong password is `Ok(false)`. An error means the stored hash itself is
/// malformed, which is a store integrity problem rather than a user error.
pub async fn verify_password(password: String, password_hash: String) -> ServiceResult<bool> {
    tokio::task::spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(|e| {
            ServiceError::internal_error(format!("Password verification task failed: {}", e))
        })?
        .map_err(|e| ServiceError::internal_error(format!("Password verification failed: {}", e)))
}
