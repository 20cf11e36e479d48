//! Rust structs that represent stored identity records.
//!
//! These models define the structure of data as it is held by the credential
//! store. They are deliberately not `Serialize`: API-facing shapes live in the
//! `api` and `auth` model modules and never carry the password hash.

use chrono::{DateTime, Utc};

/// One registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    /// `None` until the first successful login.
    pub refresh_token: Option<RefreshToken>,
}

/// Data needed to insert a new user into the store.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

/// Opaque long-lived bearer string plus its absolute expiry.
///
/// Token and expiry are kept in one value so a login always replaces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// A presented token is valid when it matches exactly and `now < expires_at`.
    pub fn is_valid_at(&self, presented: &str, now: DateTime<Utc>) -> bool {
        self.token == presented && now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn refresh_token() -> RefreshToken {
        RefreshToken {
            token: "ab".repeat(32),
            expires_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_refresh_token_validity_window() {
        let token = refresh_token();
        let expires_at = token.expires_at;

        assert!(token.is_valid_at(&token.token, expires_at - Duration::seconds(1)));
        assert!(!token.is_valid_at(&token.token, expires_at));
        assert!(!token.is_valid_at(&token.token, expires_at + Duration::days(1)));
    }

    #[test]
    fn test_refresh_token_requires_exact_match() {
        let token = refresh_token();
        let now = token.expires_at - Duration::days(1);

        assert!(!token.is_valid_at(&"cd".repeat(32), now));
        assert!(!token.is_valid_at(&token.token[..63], now));
        assert!(!token.is_valid_at("", now));
    }
}
