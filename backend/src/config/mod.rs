//! Central module for application-wide configuration settings.
//!
//! This module handles loading the signing secret, token lifetimes, the password
//! hashing cost and the server settings. It is read once at startup and shared
//! read-only for the lifetime of the process.

use anyhow::{Context, Result, bail};
use std::env;

/// Lowest and highest cost accepted by bcrypt.
const MIN_PASSWORD_HASH_COST: u32 = 4;
const MAX_PASSWORD_HASH_COST: u32 = 31;

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub refresh_token_expires_in_days: u64,
    pub password_hash_cost: u32,
    pub filesystem_root: String,
    pub server_port: u16,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;
        if jwt_secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let jwt_expires_in_seconds = env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let refresh_token_expires_in_days = env::var("REFRESH_TOKEN_EXPIRES_IN_DAYS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .context("REFRESH_TOKEN_EXPIRES_IN_DAYS must be a valid number")?;

        let password_hash_cost = env::var("PASSWORD_HASH_COST")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<u32>()
            .context("PASSWORD_HASH_COST must be a valid number")?;
        if !(MIN_PASSWORD_HASH_COST..=MAX_PASSWORD_HASH_COST).contains(&password_hash_cost) {
            bail!(
                "PASSWORD_HASH_COST must be between {} and {}",
                MIN_PASSWORD_HASH_COST,
                MAX_PASSWORD_HASH_COST
            );
        }

        let filesystem_root = env::var("FILESERVER_ROOT").unwrap_or_else(|_| ".".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        Ok(Config {
            jwt_secret,
            jwt_expires_in_seconds,
            refresh_token_expires_in_days,
            password_hash_cost,
            filesystem_root,
            server_port,
        })
    }

    /// Cheap settings for tests: minimum bcrypt cost, files served from the crate root.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: 3600,
            refresh_token_expires_in_days: 60,
            password_hash_cost: MIN_PASSWORD_HASH_COST,
            filesystem_root: env!("CARGO_MANIFEST_DIR").to_string(),
            server_port: 0,
        }
    }
}
