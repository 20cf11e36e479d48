//! Collection of general utility functions.
//!
//! Credential primitives live here: password hashing, access token signing
//! and verification, and refresh token generation.

pub mod jwt;
pub mod password;
pub mod refresh_token;
